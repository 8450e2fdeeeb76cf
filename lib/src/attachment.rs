use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::MAX_ATTACHMENT_TOTAL_SIZE;
use crate::email::Attachment;
use crate::error::Error;

/// A single attachment in transport form.
///
/// Built once by `encode_all` and not modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedAttachment {
    pub filename: String,

    /// Base64-encoded file content
    pub content: String,

    /// MIME type, carried through from the input unchanged
    pub content_type: Option<String>,

    /// Encoded length, in bytes
    pub size: usize,
}

/// Encode all attachments and enforce the cumulative size ceiling.
///
/// The ceiling applies to the Base64-expanded total across the whole list
/// and is checked before anything is dispatched, so an oversized set fails
/// without a partial send. Input order is preserved.
pub fn encode_all(attachments: &[Attachment]) -> Result<Vec<EncodedAttachment>, Error> {
    let mut total: u64 = 0;
    let mut encoded = Vec::with_capacity(attachments.len());

    for attachment in attachments {
        let content = STANDARD.encode(&attachment.content);
        let size = content.len();
        total += size as u64;

        encoded.push(EncodedAttachment {
            filename: attachment.filename.clone(),
            content,
            content_type: attachment.content_type.clone(),
            size,
        });
    }

    if total > MAX_ATTACHMENT_TOTAL_SIZE {
        return Err(Error::AttachmentTooLarge {
            encoded_size: total,
        });
    }

    Ok(encoded)
}
