use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Smallest accepted multipart body limit
const MIN_UPLOAD_BYTES: usize = 1024;
/// Largest accepted multipart body limit
const MAX_UPLOAD_LIMIT: usize = 1024 * 1024 * 1024;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("LOG_FORMAT must be 'text' or 'json', got '{}'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_root: PathBuf,
    pub listen_addr: String,
    pub max_upload_bytes: usize,
    /// Multi-file uploads always report success in the aggregate message
    pub legacy_upload_message: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("./storage"),
            listen_addr: "0.0.0.0:8088".to_string(),
            max_upload_bytes: 32 * 1024 * 1024,
            legacy_upload_message: false,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            storage_root: std::env::var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_root),
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            legacy_upload_message: std::env::var("LEGACY_UPLOAD_MESSAGE")
                .ok()
                .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.legacy_upload_message),
            // unknown formats fall back to text
            log_format: std::env::var("LOG_FORMAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// Config rooted at `storage_root` with every other value at its default
    pub fn with_storage_root(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage_root.as_os_str().is_empty() {
            return Err("STORAGE_ROOT cannot be empty".to_string());
        }

        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if !(MIN_UPLOAD_BYTES..=MAX_UPLOAD_LIMIT).contains(&self.max_upload_bytes) {
            return Err(format!(
                "MAX_UPLOAD_BYTES must be between {} and {}",
                MIN_UPLOAD_BYTES, MAX_UPLOAD_LIMIT
            ));
        }

        Ok(())
    }
}
