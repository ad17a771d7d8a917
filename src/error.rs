use thiserror::Error;

use crate::catalog::client::CatalogError;

/// Faults that escape the dispatcher. User-correctable input (a bad slot
/// value) never shows up here; it becomes an `ElicitSlot` response.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Intent with name {name} not supported")]
    UnsupportedIntent { name: String },
    #[error("movie catalog unavailable: {0}")]
    UpstreamUnavailable(#[from] CatalogError),
    #[error("malformed intent event: {0}")]
    InvalidEvent(#[source] serde_json::Error),
}

impl HandlerError {
    /// Short kind name for the host's failure-response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent { .. } => "UnsupportedIntent",
            Self::UpstreamUnavailable(_) => "UpstreamUnavailable",
            Self::InvalidEvent(_) => "InvalidEvent",
        }
    }
}
