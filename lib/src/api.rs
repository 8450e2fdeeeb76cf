/// Wire-level struct definitions shared between the server and tool-call
/// clients.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// JSON result of a successful `send_email` call.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SendEmailResponse {
    /// Message identifier assigned by the delivery provider, unchanged
    pub id: String,
}
