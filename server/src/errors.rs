use rmcp::model::ErrorData;
use serde_json::json;

use courier::Error;

/// Maps core errors onto protocol error codes.
///
/// Everything the validator catches is a caller error (invalid params);
/// delivery failures are internal errors carrying the provider's verdict so
/// clients can debug without this server paraphrasing anything; unknown
/// resource keys use the protocol's dedicated code.
///
/// Every mapping carries the stable error kind as structured data.
pub fn to_error_data(err: Error) -> ErrorData {
    let kind = err.kind();
    let message = err.to_string();

    match err {
        Error::MissingCredential
        | Error::InvalidRecipients(_)
        | Error::MissingContent
        | Error::MissingSubject
        | Error::AttachmentTooLarge { .. } => {
            ErrorData::invalid_params(message, Some(json!({ "kind": kind })))
        }
        Error::UnknownResource(_) => {
            ErrorData::resource_not_found(message, Some(json!({ "kind": kind })))
        }
        Error::DeliveryRejected {
            status,
            message: detail,
        } => ErrorData::internal_error(
            message,
            Some(json!({ "kind": kind, "status": status, "message": detail })),
        ),
        Error::DeliveryUnreachable(_) => {
            ErrorData::internal_error(message, Some(json!({ "kind": kind })))
        }
    }
}
