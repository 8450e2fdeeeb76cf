/// Tool-facing email request types and their validation.
///
/// `SendEmailRequest` is the raw shape a tool call deserializes into; it is
/// the type the tool input schema is derived from. `validate()` turns it into
/// a `ValidatedEmail` with all invariants checked and one-or-many fields
/// normalized, which is the only form the request builder accepts.
use std::collections::BTreeMap;

use email_address_parser::EmailAddress;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{Error, RecipientError};

/// Cap on `to` (and, by the same policy, `cc` and `bcc`) recipients.
pub const MAX_RECIPIENTS: usize = 50;

#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct SendEmailRequest {
    /// Sender email address, must be verified with the delivery provider
    pub from: String,

    /// List of recipient email addresses (max 50)
    pub to: Vec<String>,

    /// Email subject line
    pub subject: String,

    /// HTML content of the email (required if text_content not provided)
    #[serde(default)]
    pub html_content: Option<String>,

    /// Plain text version of the email (required if html_content not provided)
    #[serde(default)]
    pub text_content: Option<String>,

    /// List of CC recipient email addresses
    #[serde(default)]
    pub cc: Option<Vec<String>>,

    /// List of BCC recipient email addresses
    #[serde(default)]
    pub bcc: Option<Vec<String>>,

    /// Reply-to email address(es), a single address or a list
    #[serde(default)]
    pub reply_to: Option<ReplyTo>,

    /// Schedule for later delivery, natural language (e.g. "in 1 min") or
    /// ISO 8601. Forwarded to the provider as-is; it is authoritative on
    /// parsing.
    #[serde(default)]
    pub scheduled_at: Option<String>,

    /// Attachments, raw file bytes each (max 40 MB total once encoded)
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Custom tags applied to the message, name to value
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// A reply-to value as callers may write it.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ReplyTo {
    One(String),
    Many(Vec<String>),
}

impl ReplyTo {
    fn into_vec(self) -> Vec<String> {
        match self {
            ReplyTo::One(address) => vec![address],
            ReplyTo::Many(addresses) => addresses,
        }
    }
}

/// A single raw attachment as supplied by the caller.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct Attachment {
    /// Attachment filename
    pub filename: String,

    /// Raw file content
    pub content: Vec<u8>,

    /// MIME type, forwarded to the provider when set
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A request that passed validation, with `reply_to` in list form and empty
/// content/lists normalized away.
#[derive(Clone, Debug)]
pub struct ValidatedEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
    pub reply_to: Option<Vec<String>>,
    pub scheduled_at: Option<String>,
    pub attachments: Vec<Attachment>,
    pub tags: BTreeMap<String, String>,
}

fn is_valid_address(address: &str) -> bool {
    EmailAddress::parse(address, None).is_some()
}

/// Checks count and syntax for one recipient list.
fn check_list(field: &'static str, addresses: &[String]) -> Result<(), Error> {
    if addresses.len() > MAX_RECIPIENTS {
        return Err(Error::InvalidRecipients(RecipientError::TooMany {
            field,
            count: addresses.len(),
        }));
    }

    for address in addresses {
        if !is_valid_address(address) {
            return Err(Error::InvalidRecipients(RecipientError::Malformed {
                field,
                address: address.clone(),
            }));
        }
    }

    Ok(())
}

impl SendEmailRequest {
    /// Validate and normalize the request.
    ///
    /// Checks run in a fixed order (recipients, then content, then subject)
    /// so a request that fails several ways always reports the same error.
    /// `scheduled_at` is intentionally not inspected.
    pub fn validate(self) -> Result<ValidatedEmail, Error> {
        if self.to.is_empty() {
            return Err(Error::InvalidRecipients(RecipientError::Empty {
                field: "to",
            }));
        }
        check_list("to", &self.to)?;

        if let Some(ref cc) = self.cc {
            check_list("cc", cc)?;
        }

        if let Some(ref bcc) = self.bcc {
            check_list("bcc", bcc)?;
        }

        let reply_to = self.reply_to.map(ReplyTo::into_vec);
        if let Some(ref reply_to) = reply_to {
            for address in reply_to {
                if !is_valid_address(address) {
                    return Err(Error::InvalidRecipients(RecipientError::Malformed {
                        field: "reply_to",
                        address: address.clone(),
                    }));
                }
            }
        }

        if !is_valid_address(&self.from) {
            return Err(Error::InvalidRecipients(RecipientError::Malformed {
                field: "from",
                address: self.from,
            }));
        }

        // An empty string counts as no content at all
        let html = self.html_content.filter(|s| !s.is_empty());
        let text = self.text_content.filter(|s| !s.is_empty());

        if html.is_none() && text.is_none() {
            return Err(Error::MissingContent);
        }

        if self.subject.is_empty() {
            return Err(Error::MissingSubject);
        }

        Ok(ValidatedEmail {
            from: self.from,
            to: self.to,
            subject: self.subject,
            html,
            text,
            cc: self.cc.filter(|v| !v.is_empty()),
            bcc: self.bcc.filter(|v| !v.is_empty()),
            reply_to: reply_to.filter(|v| !v.is_empty()),
            scheduled_at: self.scheduled_at,
            attachments: self.attachments,
            tags: self.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SendEmailRequest {
        SendEmailRequest {
            from: "agent@example.com".to_string(),
            to: vec!["buyer@example.com".to_string()],
            subject: "Hello".to_string(),
            html_content: Some("<p>Hi</p>".to_string()),
            text_content: Some("Hi".to_string()),
            cc: None,
            bcc: None,
            reply_to: None,
            scheduled_at: None,
            attachments: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    fn addresses(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("user{}@example.com", i)).collect()
    }

    #[test]
    fn accepts_valid_request() {
        let email = request().validate().unwrap();

        assert_eq!(email.to, vec!["buyer@example.com"]);
        assert_eq!(email.html.as_deref(), Some("<p>Hi</p>"));
        assert_eq!(email.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn rejects_empty_to() {
        let mut req = request();
        req.to = Vec::new();

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Empty { field: "to" })
        );
    }

    #[test]
    fn accepts_exactly_fifty_recipients() {
        let mut req = request();
        req.to = addresses(50);

        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_more_than_fifty_recipients() {
        let mut req = request();
        req.to = addresses(51);

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::TooMany {
                field: "to",
                count: 51
            })
        );
    }

    #[test]
    fn rejects_malformed_to_address() {
        let mut req = request();
        req.to = vec!["not-an-email".to_string()];

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Malformed {
                field: "to",
                address: "not-an-email".to_string()
            })
        );
    }

    #[test]
    fn rejects_malformed_cc_address() {
        let mut req = request();
        req.cc = Some(vec!["bad@".to_string()]);

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Malformed {
                field: "cc",
                address: "bad@".to_string()
            })
        );
    }

    #[test]
    fn bcc_shares_the_recipient_cap() {
        let mut req = request();
        req.bcc = Some(addresses(51));

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::TooMany {
                field: "bcc",
                count: 51
            })
        );
    }

    #[test]
    fn rejects_malformed_sender() {
        let mut req = request();
        req.from = "nobody".to_string();

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Malformed {
                field: "from",
                address: "nobody".to_string()
            })
        );
    }

    #[test]
    fn missing_content_when_both_absent() {
        let mut req = request();
        req.html_content = None;
        req.text_content = None;

        assert_eq!(req.validate().unwrap_err(), Error::MissingContent);
    }

    #[test]
    fn empty_strings_count_as_missing_content() {
        let mut req = request();
        req.html_content = Some(String::new());
        req.text_content = Some(String::new());

        assert_eq!(req.validate().unwrap_err(), Error::MissingContent);
    }

    #[test]
    fn one_content_form_is_enough() {
        let mut req = request();
        req.html_content = None;

        let email = req.validate().unwrap();
        assert!(email.html.is_none());
        assert_eq!(email.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn rejects_empty_subject() {
        let mut req = request();
        req.subject = String::new();

        assert_eq!(req.validate().unwrap_err(), Error::MissingSubject);
    }

    #[test]
    fn recipients_are_checked_before_content() {
        let mut req = request();
        req.to = Vec::new();
        req.html_content = None;
        req.text_content = None;

        // Both are broken; the recipient failure must win.
        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Empty { field: "to" })
        );
    }

    #[test]
    fn content_is_checked_before_subject() {
        let mut req = request();
        req.subject = String::new();
        req.html_content = None;
        req.text_content = None;

        assert_eq!(req.validate().unwrap_err(), Error::MissingContent);
    }

    #[test]
    fn single_reply_to_is_normalized_to_a_list() {
        let mut req = request();
        req.reply_to = Some(ReplyTo::One("agent@example.com".to_string()));

        let email = req.validate().unwrap();
        assert_eq!(email.reply_to, Some(vec!["agent@example.com".to_string()]));
    }

    #[test]
    fn reply_to_list_is_kept() {
        let mut req = request();
        req.reply_to = Some(ReplyTo::Many(vec![
            "a@example.com".to_string(),
            "b@example.com".to_string(),
        ]));

        let email = req.validate().unwrap();
        assert_eq!(email.reply_to.map(|v| v.len()), Some(2));
    }

    #[test]
    fn rejects_malformed_reply_to() {
        let mut req = request();
        req.reply_to = Some(ReplyTo::Many(vec!["oops".to_string()]));

        assert_eq!(
            req.validate().unwrap_err(),
            Error::InvalidRecipients(RecipientError::Malformed {
                field: "reply_to",
                address: "oops".to_string()
            })
        );
    }

    #[test]
    fn scheduled_at_is_passed_through_untouched() {
        let mut req = request();
        req.scheduled_at = Some("in 1 min".to_string());

        let email = req.validate().unwrap();
        assert_eq!(email.scheduled_at.as_deref(), Some("in 1 min"));
    }

    #[test]
    fn empty_optional_lists_normalize_to_none() {
        let mut req = request();
        req.cc = Some(Vec::new());
        req.reply_to = Some(ReplyTo::Many(Vec::new()));

        let email = req.validate().unwrap();
        assert!(email.cc.is_none());
        assert!(email.reply_to.is_none());
    }
}
