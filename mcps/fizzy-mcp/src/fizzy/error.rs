//! Error types for Fizzy API calls

use thiserror::Error;

/// Errors that can occur when talking to the Fizzy backend
#[derive(Error, Debug)]
pub enum FizzyError {
    /// The backend answered with a non-2xx status
    #[error("Fizzy API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response text; error bodies are not guaranteed to be JSON
        body: String,
    },

    /// Connection, TLS or protocol failure
    #[error("request to Fizzy failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body that is not the JSON we expected
    #[error("failed to decode Fizzy response: {0}")]
    Json(#[from] serde_json::Error),
}

impl FizzyError {
    /// Status code of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            FizzyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Fizzy operations
pub type FizzyResult<T> = Result<T, FizzyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_raw_body() {
        let err = FizzyError::Api {
            status: 422,
            body: "{\"title\":[\"can't be blank\"]}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fizzy API error (422): {\"title\":[\"can't be blank\"]}"
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_json_error_has_no_status() {
        let err: FizzyError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), None);
    }
}
