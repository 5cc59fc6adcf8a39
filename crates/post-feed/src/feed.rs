//! Presentation State Machine
//!
//! Drives the API Data view: paginated browsing, title search, and the
//! loading / error states in between.
//!
//! Every action that needs the network hands out a [`Ticket`] tagged with a
//! fresh generation. The caller runs [`execute`] for the ticket's request and
//! passes the outcome back to [`Feed::complete`]; outcomes for anything but
//! the latest ticket are dropped, so a slow earlier response can never
//! overwrite a newer one.

use crate::client::PostsApi;
use crate::error::FeedResult;
use crate::model::Post;
use crate::pagination::Pagination;
use crate::query::filter_by_title;

/// Shown when a page fails to load. Details go to the log only.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load posts. Please try again later.";

/// Shown when a search fails. Details go to the log only.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search posts. Please try again.";

/// What a ticket asks the network for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    Page { page: u32, limit: u32 },
    /// Fetch the whole collection, then filter by title
    Search { query: String },
}

/// A generation-tagged request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    request: FeedRequest,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &FeedRequest {
        &self.request
    }
}

/// Outcome of the most recently issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Loading,
    Browsing { page: u32, posts: Vec<Post> },
    Searching { query: String, posts: Vec<Post> },
    Error { message: String },
}

impl FeedState {
    /// Records to display; empty while loading or on error
    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Browsing { posts, .. } | FeedState::Searching { posts, .. } => posts.as_slice(),
            FeedState::Loading | FeedState::Error { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedState::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Feed {
    pagination: Pagination,
    /// `Some` while in search mode, independent of the load state
    search: Option<String>,
    state: FeedState,
    generation: u64,
}

impl Feed {
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            search: None,
            state: FeedState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.limit()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Next is offered only after a full page was browsed
    pub fn has_next(&self) -> bool {
        match &self.state {
            FeedState::Browsing { posts, .. } => {
                !self.is_searching() && self.pagination.has_next(posts.len())
            }
            _ => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        !self.is_searching() && self.pagination.has_prev()
    }

    /// Initial load of the current page
    pub fn mount(&mut self) -> Ticket {
        self.issue_page()
    }

    pub fn next_page(&mut self) -> Option<Ticket> {
        if !self.has_next() {
            return None;
        }
        self.pagination.next();
        Some(self.issue_page())
    }

    pub fn prev_page(&mut self) -> Option<Ticket> {
        if !self.has_prev() {
            return None;
        }
        self.pagination.prev();
        Some(self.issue_page())
    }

    /// Submit the search box. A blank query leaves search mode instead.
    ///
    /// Trimming only decides blankness; the filter uses the input as typed.
    pub fn submit_search(&mut self, raw: &str) -> Ticket {
        if raw.trim().is_empty() {
            return self.clear_search();
        }

        self.search = Some(raw.to_string());
        self.pagination.reset();
        self.issue(FeedRequest::Search { query: raw.to_string() })
    }

    /// Back to browsing page 1 with a fresh fetch, also when already there
    pub fn clear_search(&mut self) -> Ticket {
        self.search = None;
        self.pagination.reset();
        self.issue_page()
    }

    /// Apply the outcome of `ticket`. Returns false if a newer ticket was
    /// issued since, in which case the outcome is discarded.
    pub fn complete(&mut self, ticket: Ticket, outcome: FeedResult<Vec<Post>>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "[FEED] Discarding stale response (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match (ticket.request, outcome) {
            (FeedRequest::Page { page, .. }, Ok(posts)) => {
                log::debug!("[FEED] Loaded {} posts for page {}", posts.len(), page);
                FeedState::Browsing { page, posts }
            }
            (FeedRequest::Search { query }, Ok(posts)) => {
                log::debug!("[FEED] Found {} posts for {:?}", posts.len(), query);
                FeedState::Searching { query, posts }
            }
            (FeedRequest::Page { page, .. }, Err(e)) => {
                log::error!("[FEED] Failed to load page {}: {}", page, e);
                FeedState::Error { message: LOAD_FAILED_MESSAGE.to_string() }
            }
            (FeedRequest::Search { query }, Err(e)) => {
                log::error!("[FEED] Failed to search {:?}: {}", query, e);
                FeedState::Error { message: SEARCH_FAILED_MESSAGE.to_string() }
            }
        };
        true
    }

    fn issue_page(&mut self) -> Ticket {
        let request = FeedRequest::Page {
            page: self.pagination.page(),
            limit: self.pagination.limit(),
        };
        self.issue(request)
    }

    fn issue(&mut self, request: FeedRequest) -> Ticket {
        self.generation += 1;
        self.state = FeedState::Loading;
        Ticket {
            generation: self.generation,
            request,
        }
    }
}

/// Run a ticket's request against `api`
pub async fn execute<A>(api: &A, request: &FeedRequest) -> FeedResult<Vec<Post>>
where
    A: PostsApi + ?Sized,
{
    match request {
        FeedRequest::Page { page, limit } => api.fetch_page(*page, *limit).await,
        FeedRequest::Search { query } => {
            let all = api.fetch_all().await?;
            Ok(filter_by_title(&all, query))
        }
    }
}
