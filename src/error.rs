use thiserror::Error;

/// Outcome of a failed single-fruit lookup.
///
/// Transport and parser failures are folded into these kinds at the
/// [`FruitApi`](crate::api::FruitApi) boundary, so callers only ever branch on
/// "not there" versus "FruityVice is having a bad day".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0} not in FruityVice database")]
    NotFound(String),

    #[error("FruityVice unavailable{}", status_suffix(.status))]
    ServerUnavailable { status: Option<u16> },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl LookupError {
    /// True when the fruit should be reported as missing.
    ///
    /// A payload we cannot decode fails closed and counts as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MalformedPayload(_))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

#[derive(Error, Debug)]
pub enum FruityError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is not a supported output format")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FruityError>;
