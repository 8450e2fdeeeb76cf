use serde::{Deserialize, Serialize};

use crate::attachment::EncodedAttachment;
use crate::email::ValidatedEmail;

/// Request body for `POST /emails`, shaped exactly as the Resend API expects.
///
/// Optional fields are omitted from the JSON payload rather than sent as
/// null. Field names are fixed by the provider's contract.
#[derive(Clone, Debug, Serialize)]
pub struct SendEmailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentPayload>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AttachmentPayload {
    pub filename: String,

    /// Base64-encoded file content
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// Response body on success.
#[derive(Debug, Deserialize)]
pub struct SendResponse {
    pub id: String,
}

/// Error body the API returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl SendEmailPayload {
    /// Assemble the provider payload from a validated request and its
    /// encoded attachments.
    ///
    /// Pure and deterministic: tags are emitted in key order, everything
    /// else keeps the caller's ordering.
    pub fn build(email: ValidatedEmail, attachments: Vec<EncodedAttachment>) -> Self {
        let ValidatedEmail {
            from,
            to,
            subject,
            html,
            text,
            cc,
            bcc,
            reply_to,
            scheduled_at,
            tags,
            ..
        } = email;

        let attachments = attachments
            .into_iter()
            .map(|a| AttachmentPayload {
                filename: a.filename,
                content: a.content,
                content_type: a.content_type,
            })
            .collect();

        let tags = tags
            .into_iter()
            .map(|(name, value)| Tag { name, value })
            .collect();

        Self {
            from,
            to,
            subject,
            html,
            text,
            cc,
            bcc,
            reply_to,
            scheduled_at,
            attachments,
            tags,
        }
    }
}
