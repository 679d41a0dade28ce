//! Error types for fetching users

use thiserror::Error;

/// Why a random-user fetch failed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("connection failed")]
    Connect(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("could not decode response")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Transport hiccups are worth another attempt; bad answers are not
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Timeout(_) | FetchError::Connect(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e)
        } else if e.is_connect() {
            FetchError::Connect(e)
        } else {
            FetchError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_failures_retry() {
        assert!(!FetchError::Status(503).is_retryable());
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!FetchError::from(decode).is_retryable());
    }

    #[test]
    fn test_messages_are_readable() {
        assert_eq!(FetchError::Status(404).to_string(), "server responded with HTTP 404");
        let err = FetchError::InvalidEndpoint {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.to_string(), "invalid endpoint 'nope': relative URL without a base");
    }

    #[test]
    fn test_wrapped_errors_leave_detail_to_source() {
        use std::error::Error as _;

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = json.to_string();
        let err = FetchError::from(json);
        assert_eq!(err.to_string(), "could not decode response");
        assert_eq!(err.source().unwrap().to_string(), detail);

        // Chained rendering names the cause exactly once
        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chained.matches(detail.as_str()).count(), 1);
    }

    #[tokio::test]
    async fn test_connect_error_is_not_repeated() {
        use std::error::Error as _;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let raw = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .unwrap_err();
        let err = FetchError::from(raw);
        assert!(matches!(err, FetchError::Connect(_)));
        assert_eq!(err.to_string(), "connection failed");
        assert!(err.source().is_some());
    }
}
