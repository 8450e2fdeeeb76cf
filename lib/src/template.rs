/// Static email-template resources.
///
/// One namespace is supported: `property-inquiry`, keyed by
/// `email-template://property-inquiry/{property_link}`. Generation is a pure
/// function of the property link; the sender's name is left as a literal
/// placeholder for the caller to substitute.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SCHEME: &str = "email-template";
pub const NAMESPACE: &str = "property-inquiry";
pub const URI_TEMPLATE: &str = "email-template://property-inquiry/{property_link}";

/// Token callers replace with the actual sender name.
pub const SENDER_NAME_PLACEHOLDER: &str = "[SENDER_NAME]";

/// A templated message body. All three fields are always present together.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct TemplateResource {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Resolve a resource URI against the supported template namespace.
///
/// The URI must be `email-template://property-inquiry/<property_link>` with
/// exactly one non-empty path segment; the segment is percent-decoded before
/// being substituted into the template. Anything else is unknown.
pub fn resolve(uri: &str) -> Result<TemplateResource, Error> {
    let unknown = || Error::UnknownResource(uri.to_string());

    let parsed = url::Url::parse(uri).map_err(|_| unknown())?;

    if parsed.scheme() != SCHEME || parsed.host_str() != Some(NAMESPACE) {
        return Err(unknown());
    }

    let mut segments = parsed.path_segments().ok_or_else(unknown)?;
    let link = match (segments.next(), segments.next()) {
        (Some(link), None) if !link.is_empty() => link,
        _ => return Err(unknown()),
    };

    let link = urlencoding::decode(link).map_err(|_| unknown())?;

    Ok(property_inquiry(&link))
}

/// Build the property-inquiry template for one property link.
pub fn property_inquiry(property_link: &str) -> TemplateResource {
    let subject = "Interested by your property!".to_string();

    let text = format!(
        "Hello,\n\
         \n\
         We came across your listing for your property and we're really interested!\n\
         \n\
         Here is the link to the property: {property_link}\n\
         \n\
         Would it be possible to schedule a visit?\n\
         \n\
         Looking forward to hearing back from you!\n\
         \n\
         Thanks,\n\
         {SENDER_NAME_PLACEHOLDER}"
    );

    let html = format!(
        "<p>Hello,</p>\
         <p>We came across your listing for your property and we're really interested!</p>\
         <p>Here is the link to the property: <a href=\"{property_link}\">{property_link}</a></p>\
         <p>Would it be possible to schedule a visit?</p>\
         <p>Looking forward to hearing back from you!</p>\
         <p>Thanks,<br>{SENDER_NAME_PLACEHOLDER}</p>"
    );

    TemplateResource {
        subject,
        html,
        text,
    }
}
