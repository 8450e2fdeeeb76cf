use serde::Serialize;

/// Reason a recipient list failed validation.
///
/// `field` names the offending request field (`to`, `cc`, `bcc`, `reply_to`,
/// or `from`) so callers can report exactly what to fix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum RecipientError {
    Empty { field: &'static str },
    TooMany { field: &'static str, count: usize },
    Malformed { field: &'static str, address: String },
}

/// All possible Courier library errors
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Error {
    MissingCredential,
    InvalidRecipients(RecipientError),
    MissingContent,
    MissingSubject,
    AttachmentTooLarge { encoded_size: u64 },
    DeliveryUnreachable(String),
    DeliveryRejected { status: u16, message: String },
    UnknownResource(String),
}

impl Error {
    /// Stable identifier for the error kind, exposed to tool-call clients
    /// alongside the human-readable message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingCredential => "missing_credential",
            Error::InvalidRecipients(_) => "invalid_recipients",
            Error::MissingContent => "missing_content",
            Error::MissingSubject => "missing_subject",
            Error::AttachmentTooLarge { .. } => "attachment_too_large",
            Error::DeliveryUnreachable(_) => "delivery_unreachable",
            Error::DeliveryRejected { .. } => "delivery_rejected",
            Error::UnknownResource(_) => "unknown_resource",
        }
    }
}

impl std::fmt::Display for RecipientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            RecipientError::Empty { field } => {
                write!(f, "'{}' must contain at least one address", field)
            }
            RecipientError::TooMany { field, count } => {
                write!(f, "'{}' holds {} addresses; at most 50 are allowed", field, count)
            }
            RecipientError::Malformed { field, ref address } => {
                write!(f, "'{}' contains an invalid email address: {}", field, address)
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingCredential => write!(
                f,
                "Missing X-API-KEY header. Please provide your delivery API key."
            ),
            Error::InvalidRecipients(ref e) => write!(f, "Invalid recipients: {}", e),
            Error::MissingContent => write!(
                f,
                "At least one of html_content or text_content must be provided."
            ),
            Error::MissingSubject => write!(f, "Subject must not be empty."),
            Error::AttachmentTooLarge { encoded_size } => write!(
                f,
                "Attachments exceed the 40 MB limit once encoded ({} bytes)",
                encoded_size
            ),
            Error::DeliveryUnreachable(ref msg) => {
                write!(f, "Could not reach the delivery API: {}", msg)
            }
            Error::DeliveryRejected { status, ref message } => {
                write!(f, "Email send failed ({}): {}", status, message)
            }
            Error::UnknownResource(ref uri) => write!(f, "Unknown resource: {}", uri),
        }
    }
}

impl std::error::Error for Error {}
