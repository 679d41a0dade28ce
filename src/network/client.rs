//! HTTP client wrapper - fetches random users and decodes them

use std::time::Duration;

use crate::config::Config;
use crate::constants::{APP_VERSION, DEFAULT_FETCH_COUNT};
use crate::error::FetchError;
use crate::models::{RandomUserPage, User};

/// Pause between a failed attempt and its retry
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Endpoint and retry policy for user fetches
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchSettings {
    pub api_url: String,
    pub retries: u32,
}

impl From<&Config> for FetchSettings {
    fn from(config: &Config) -> Self {
        FetchSettings {
            api_url: config.api_url.clone(),
            retries: config.retries,
        }
    }
}

/// Build `<api_url>?results=<count>`, keeping any query the URL already has
pub fn users_url(api_url: &str, count: usize) -> Result<reqwest::Url, FetchError> {
    let mut url = reqwest::Url::parse(api_url).map_err(|e| FetchError::InvalidEndpoint {
        url: api_url.to_string(),
        reason: e.to_string(),
    })?;
    url.query_pairs_mut()
        .append_pair("results", &count.max(DEFAULT_FETCH_COUNT).to_string());
    Ok(url)
}

/// Decode a `{ "results": [...] }` body
pub fn decode_users(body: &str) -> Result<Vec<User>, FetchError> {
    let page: RandomUserPage = serde_json::from_str(body)?;
    Ok(page.results)
}

/// Fetch `count` users, retrying transport failures
pub async fn fetch_users(
    client: &reqwest::Client,
    settings: &FetchSettings,
    count: usize,
) -> Result<Vec<User>, FetchError> {
    let url = users_url(&settings.api_url, count)?;
    let mut attempt = 0;

    loop {
        match fetch_once(client, url.clone()).await {
            Err(e) if e.is_retryable() && attempt < settings.retries => {
                attempt += 1;
                tracing::warn!(attempt, error = %e, "Fetch failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
            result => return result,
        }
    }
}

async fn fetch_once(client: &reqwest::Client, url: reqwest::Url) -> Result<Vec<User>, FetchError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = resp.text().await?;
    decode_users(&body)
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("userdir-tui/{}", APP_VERSION))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}


#[cfg(test)]
mod tests {
    use super::test_server::{
        closed_port_url, hanging_server, local_client, serve_once, status_server, users_body,
    };
    use super::*;
    use std::sync::atomic::Ordering;

    fn settings(api_url: String, retries: u32) -> FetchSettings {
        FetchSettings { api_url, retries }
    }

    #[test]
    fn test_users_url() {
        let url = users_url("https://randomuser.me/api/", 5).unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=5");

        let url = users_url("https://randomuser.me/api/?nat=fr", 1).unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?nat=fr&results=1");
    }

    #[test]
    fn test_users_url_clamps_zero_count() {
        let url = users_url("https://randomuser.me/api/", 0).unwrap();
        assert_eq!(url.query(), Some("results=1"));
    }

    #[test]
    fn test_users_url_rejects_garbage() {
        assert!(matches!(
            users_url("not a url", 1),
            Err(FetchError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_decode_users() {
        let users = decode_users(&users_body(2)).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1], User::new("Ann1", "Lee", "Rome", "female"));

        assert!(matches!(decode_users("<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(decode_users(r#"{"error":"down"}"#), Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_users_sends_count_and_decodes() {
        let (url, server) = serve_once("200 OK", users_body(3)).await;
        let users = fetch_users(&local_client(), &settings(url, 0), 3).await.unwrap();
        assert_eq!(users.len(), 3);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/?results=3 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_fetch_users_reports_status() {
        let (url, _server) = serve_once("503 Service Unavailable", String::from("{}")).await;
        let err = fetch_users(&local_client(), &settings(url, 0), 1).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_users_connect_failure_after_retry() {
        let url = closed_port_url().await;
        let err = fetch_users(&local_client(), &settings(url, 1), 1).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_timeout_is_retried_exactly_once() {
        let (url, accepted) = hanging_server().await;
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();

        let err = fetch_users(&client, &settings(url, 1), 1).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
        assert_eq!(accepted.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_status_error_is_not_retried() {
        let (url, accepted) = status_server("503 Service Unavailable", String::from("{}")).await;

        let err = fetch_users(&local_client(), &settings(url, 1), 1).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }
}
