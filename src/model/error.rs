//! Error types for catalog fetches and study tools

use thiserror::Error;

/// Everything that can go wrong while fetching from the catalog.
///
/// All variants collapse into a single `Failed(reason)` state; the `Display`
/// output is the reason shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success status
    #[error("Catalog request failed with HTTP {status}")]
    Http { status: u16 },

    /// The body was not valid JSON or lacked required fields
    #[error("Malformed catalog response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Reason stored in the failed search state and shown in place of the list.
    /// Rate limiting and server outages get friendlier wording.
    pub fn reason(&self) -> String {
        match self {
            FetchError::Http { status: 429 } => {
                "The catalog is rate limiting requests. Please wait a moment.".to_string()
            }
            FetchError::Http { status } if *status >= 500 => {
                format!("The catalog service is unavailable right now (HTTP {status}).")
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchError::Parse(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Http {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Parse(error.to_string())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    #[error("{0} is not available yet")]
    Unavailable(&'static str),
}
