//! Feed Errors
//!
//! Failures surfaced by the remote collection client.

/// Common result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Client-side feed error
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("decode: {0}")]
    Decode(String),

    #[error("config: {0}")]
    Config(String),
}

impl FeedError {
    /// `fetch_by_id` reports a missing record as HTTP 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeedError::Http { status: 404 })
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_http_404() {
        assert!(FeedError::Http { status: 404 }.is_not_found());
        assert!(!FeedError::Http { status: 500 }.is_not_found());
        assert!(!FeedError::Decode("eof".into()).is_not_found());
    }

    #[test]
    fn test_http_error_display_carries_status() {
        let err = FeedError::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }
}
