use rmcp::model::ErrorData;
use rmcp::service::RequestContext;
use rmcp::RoleServer;

use courier::credential::ApiKey;
use courier::Error;

use crate::errors;

/// Extract the caller's API key from the HTTP request that carried this
/// tool call.
///
/// The streamable-HTTP transport forwards the original request head through
/// the context extensions; a call arriving without one (or without a usable
/// `X-API-KEY` header) is a caller error, never a server fault. The key is
/// returned by value and lives only as long as the call handling it.
pub fn api_key(context: &RequestContext<RoleServer>) -> Result<ApiKey, ErrorData> {
    let parts = context
        .extensions
        .get::<http::request::Parts>()
        .ok_or_else(|| errors::to_error_data(Error::MissingCredential))?;

    ApiKey::from_headers(&parts.headers).map_err(errors::to_error_data)
}
