//! Post Feed
//!
//! Paginated browsing and title search over the JSONPlaceholder `posts`
//! collection. Target-independent: the same code runs in the browser
//! (wasm32, driven by Leptos `spawn_local`) and natively under tests.
//!
//! Layers:
//! - model: records decoded from the remote collection
//! - client: the `PostsApi` seam and its reqwest implementation
//! - query / pagination: pure helpers
//! - feed: the presentation state machine with request generations

mod client;
mod config;
mod error;
mod feed;
mod model;
mod pagination;
mod query;

#[cfg(test)]
mod tests;

pub use client::{HttpPostsClient, PostsApi};
pub use config::{FeedConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{FeedError, FeedResult};
pub use feed::{execute, Feed, FeedRequest, FeedState, Ticket, LOAD_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};
pub use model::{Post, User};
pub use pagination::Pagination;
pub use query::filter_by_title;
