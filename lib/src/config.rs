use serde::Deserialize;

pub const DEFAULT_PATH: &str = "/etc/courier/courier.toml";
const ENV_PREFIX: &str = "COURIER";

/// Ceiling on the Base64-expanded size of all attachments in one email,
/// in bytes (40 MB).
pub const MAX_ATTACHMENT_TOTAL_SIZE: u64 = 40 * 1024 * 1024;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    /// Base URL of the delivery API
    pub api_base_url: String,

    /// Timeout for the outbound delivery call, in seconds
    pub timeout_secs: u64,
}

/// Loads Courier config from the filesystem and merges it with any
/// environment variables prefixed with COURIER_.
///
/// The file is optional at the default path but required when a path is
/// given explicitly. This function will panic on error.
pub fn load_config(path: Option<&str>) -> Settings {
    let file = config::File::with_name(path.unwrap_or(DEFAULT_PATH)).required(path.is_some());

    config::Config::builder()
        .set_default("api_base_url", crate::resend::DEFAULT_BASE_URL)
        .unwrap()
        .set_default("timeout_secs", 30)
        .unwrap()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}
