use thiserror::Error;

/// Why an inbound frame could not be turned into a message.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary frame ({len} bytes) ignored; only text frames are understood")]
    Binary { len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A rendering target the console cannot run without.
///
/// Reported once; nothing is started after one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas has no 2d rendering context")]
    NoCanvasContext,
}
