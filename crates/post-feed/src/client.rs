//! Remote Collection Client
//!
//! Thin wrapper over the JSONPlaceholder REST API. Every call is a single
//! GET: no caching, no retry, no timeout.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};
use crate::model::{Post, User};

/// Access to the remote posts collection.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded `spawn_local` executor.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /posts?_page={page}&_limit={limit}`
    async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>>;

    /// `GET /posts`
    async fn fetch_all(&self) -> FeedResult<Vec<Post>>;

    /// `GET /posts/{id}`; a missing post is `FeedError::Http { status: 404 }`
    async fn fetch_by_id(&self, id: u32) -> FeedResult<Post>;

    /// `GET /users`
    async fn fetch_users(&self) -> FeedResult<Vec<User>>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpPostsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_url(&self, page: u32, limit: u32) -> String {
        format!("{}/posts?_page={}&_limit={}", self.base_url, page, limit)
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: u32) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FeedResult<T> {
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        decode_response(status, &text)
    }
}

/// Map a status and body to a decoded payload or a typed failure
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> FeedResult<T> {
    if !status.is_success() {
        return Err(FeedError::Http { status: status.as_u16() });
    }
    Ok(serde_json::from_str(body)?)
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>> {
        self.get_json(&self.page_url(page, limit)).await.inspect_err(|e| {
            log::error!("Error fetching posts: {}", e);
        })
    }

    async fn fetch_all(&self) -> FeedResult<Vec<Post>> {
        self.get_json(&self.posts_url()).await.inspect_err(|e| {
            log::error!("Error fetching all posts: {}", e);
        })
    }

    async fn fetch_by_id(&self, id: u32) -> FeedResult<Post> {
        self.get_json(&self.post_url(id)).await.inspect_err(|e| {
            log::error!("Error fetching post {}: {}", id, e);
        })
    }

    async fn fetch_users(&self) -> FeedResult<Vec<User>> {
        self.get_json(&self.users_url()).await.inspect_err(|e| {
            log::error!("Error fetching users: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = HttpPostsClient::new("https://jsonplaceholder.typicode.com/");

        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
        assert_eq!(
            client.page_url(2, 10),
            "https://jsonplaceholder.typicode.com/posts?_page=2&_limit=10"
        );
        assert_eq!(client.posts_url(), "https://jsonplaceholder.typicode.com/posts");
        assert_eq!(client.post_url(7), "https://jsonplaceholder.typicode.com/posts/7");
        assert_eq!(client.users_url(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn test_decode_response_success() {
        let body = r#"[{"userId": 1, "id": 1, "title": "qui est esse", "body": "x"}]"#;
        let posts: Vec<Post> = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "qui est esse");
    }

    #[test]
    fn test_decode_response_non_success_is_http_error() {
        let err = decode_response::<Vec<Post>>(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
        assert!(matches!(err, FeedError::Http { status: 500 }));

        let err = decode_response::<Post>(StatusCode::NOT_FOUND, "{}").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_response_bad_body_is_decode_error() {
        let err = decode_response::<Vec<Post>>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));

        // Object where an array is expected
        let err = decode_response::<Vec<Post>>(StatusCode::OK, r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn test_from_config() {
        let config = FeedConfig {
            base_url: "http://localhost:3000".to_string(),
            page_size: 5,
        };
        let client = HttpPostsClient::from_config(&config);
        assert_eq!(client.page_url(1, 5), "http://localhost:3000/posts?_page=1&_limit=5");
    }
}
