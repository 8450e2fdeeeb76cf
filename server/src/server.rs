use std::sync::Arc;
use std::time::Duration;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    ErrorData, ListResourceTemplatesResult, PaginatedRequestParam, RawResourceTemplate,
    ReadResourceRequestParam, ReadResourceResult, ResourceContents, ResourceTemplate,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, Json, RoleServer, ServerHandler};

use courier::api::SendEmailResponse;
use courier::config::Settings;
use courier::email::SendEmailRequest;
use courier::{resend, template};

use crate::auth;
use crate::errors;

/// MCP server exposing the `send_email` tool and the email-template
/// resources.
///
/// Holds only the shared dispatcher client; credentials arrive per call and
/// are never kept here, so concurrent sessions share nothing mutable.
#[derive(Clone)]
pub struct CourierServer {
    client: Arc<resend::Client>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CourierServer {
    pub fn new(settings: &Settings) -> Self {
        let client = resend::Client::new(
            &settings.api_base_url,
            Duration::from_secs(settings.timeout_secs),
        );

        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    /// Tool: send an email through the delivery provider
    ///
    /// The caller's API key comes from the `X-API-KEY` header of this very
    /// request and goes no further than the one outbound call.
    #[tool(
        name = "send_email",
        description = "Send emails via the Resend API. IMPORTANT: Always include BOTH html_content AND text_content to avoid delivery issues."
    )]
    async fn send_email(
        &self,
        Parameters(request): Parameters<SendEmailRequest>,
        context: RequestContext<RoleServer>,
    ) -> Result<Json<SendEmailResponse>, ErrorData> {
        let api_key = auth::api_key(&context)?;

        let id = self
            .client
            .send_email(request, &api_key)
            .await
            .map_err(errors::to_error_data)?;

        Ok(Json(SendEmailResponse { id }))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CourierServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Outbound email server with pass-through authentication. Every send_email \
                 call must carry the caller's delivery API key in the X-API-KEY header; \
                 no credentials are stored server-side."
                    .to_owned(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let raw = RawResourceTemplate {
            uri_template: template::URI_TEMPLATE.to_owned(),
            name: "Property Inquiry Email Template".to_owned(),
            title: None,
            description: Some(
                "Email template with subject, html, and text for property inquiries. \
                 Replace the placeholders with the actual values."
                    .to_owned(),
            ),
            mime_type: Some("application/json".to_owned()),
        };

        Ok(ListResourceTemplatesResult {
            resource_templates: vec![ResourceTemplate {
                raw,
                annotations: None,
            }],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let resource = template::resolve(&request.uri).map_err(errors::to_error_data)?;

        let body = serde_json::to_string_pretty(&resource)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;

        let mut contents = ResourceContents::text(body, request.uri.as_str());
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some("application/json".to_owned());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
