use http::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Header carrying the caller's delivery API key.
/// Matching is case-insensitive on the wire.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Per-call API credential.
///
/// The secret is scoped to a single tool invocation: it is read out of the
/// inbound headers, handed to the dispatcher, and dropped. Wrapping it keeps
/// the value out of `Debug` output and log lines.
#[derive(Debug)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Reveal the secret for the outbound Authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Pull the credential out of the forwarded per-call headers.
    ///
    /// A missing header, a non-UTF-8 value, or an empty value all mean the
    /// caller did not supply a usable key.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        let value = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if value.is_empty() {
            return Err(Error::MissingCredential);
        }

        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::HeaderValue;

    #[test]
    fn extracts_key_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("re_123"));

        let key = ApiKey::from_headers(&headers).unwrap();
        assert_eq!(key.expose(), "re_123");
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-KEY", HeaderValue::from_static("re_123"));

        let key = ApiKey::from_headers(&headers).unwrap();
        assert_eq!(key.expose(), "re_123");
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert_eq!(
            ApiKey::from_headers(&headers).unwrap_err(),
            Error::MissingCredential
        );
    }

    #[test]
    fn empty_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static(""));

        assert_eq!(
            ApiKey::from_headers(&headers).unwrap_err(),
            Error::MissingCredential
        );
    }

    #[test]
    fn debug_output_does_not_leak_the_secret() {
        let key = ApiKey::new("re_secret_value");
        let printed = format!("{:?}", key);
        assert!(!printed.contains("re_secret_value"));
    }
}
