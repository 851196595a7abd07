//! Configuration module
//!
//! Environment-driven configuration for the Billed client. Every value has
//! a working default so the CLI runs against a local store out of the box.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:5678";
const DEFAULT_UPLOAD_BASE_URL: &str = "http://localhost:5678/";
const DEFAULT_SESSION_PATH: &str = ".billed/session.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Client configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the remote bill store API.
    pub api_base_url: String,
    /// Public base URL uploaded receipts are served from. Always ends with '/'.
    pub upload_base_url: String,
    /// Path of the session file holding the logged-in user record.
    pub session_path: PathBuf,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let api_base_url = env::var("BILLED_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let upload_base_url = env::var("BILLED_UPLOAD_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_BASE_URL.to_string());

        let session_path = env::var("BILLED_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_PATH));

        let http_timeout_secs = env::var("BILLED_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Self {
            api_base_url,
            upload_base_url: ensure_trailing_slash(upload_base_url),
            session_path,
            http_timeout_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

// Derived file URLs are base + segment, so the base must keep its slash.
fn ensure_trailing_slash(url: String) -> String {
    if url.ends_with('/') {
        url
    } else {
        format!("{}/", url)
    }
}
