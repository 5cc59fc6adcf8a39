//! Feed Scenario Tests
//!
//! Drives `Feed` end to end against an in-memory `PostsApi`.

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;

    use crate::{
        execute, Feed, FeedError, FeedRequest, FeedResult, FeedState, Post, PostsApi, Ticket, User,
        LOAD_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
    };

    /// In-memory stand-in for the remote collection
    struct FakeApi {
        posts: Vec<Post>,
        fail_with: Cell<Option<u16>>,
        page_calls: Cell<u32>,
        all_calls: Cell<u32>,
    }

    impl FakeApi {
        fn new(posts: Vec<Post>) -> Self {
            Self {
                posts,
                fail_with: Cell::new(None),
                page_calls: Cell::new(0),
                all_calls: Cell::new(0),
            }
        }

        fn with_count(count: u32) -> Self {
            Self::new((1..=count).map(|id| make_post(id, &format!("post number {}", id))).collect())
        }

        fn check(&self) -> FeedResult<()> {
            match self.fail_with.get() {
                Some(status) => Err(FeedError::Http { status }),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PostsApi for FakeApi {
        async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>> {
            self.page_calls.set(self.page_calls.get() + 1);
            self.check()?;
            let start = ((page.max(1) - 1) * limit) as usize;
            Ok(self.posts.iter().skip(start).take(limit as usize).cloned().collect())
        }

        async fn fetch_all(&self) -> FeedResult<Vec<Post>> {
            self.all_calls.set(self.all_calls.get() + 1);
            self.check()?;
            Ok(self.posts.clone())
        }

        async fn fetch_by_id(&self, id: u32) -> FeedResult<Post> {
            self.check()?;
            self.posts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(FeedError::Http { status: 404 })
        }

        async fn fetch_users(&self) -> FeedResult<Vec<User>> {
            self.check()?;
            Ok(Vec::new())
        }
    }

    fn make_post(id: u32, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: format!("body {}", id),
            user_id: (id - 1) / 10 + 1,
        }
    }

    async fn run(feed: &mut Feed, api: &FakeApi, ticket: Ticket) -> bool {
        let outcome = execute(api, ticket.request()).await;
        feed.complete(ticket, outcome)
    }

    #[tokio::test]
    async fn test_first_page_of_hundred_enables_next() {
        let api = FakeApi::with_count(100);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        assert!(feed.state().is_loading());
        assert!(run(&mut feed, &api, ticket).await);

        assert_eq!(feed.state().posts().len(), 10);
        assert!(matches!(feed.state(), FeedState::Browsing { page: 1, .. }));
        assert!(feed.has_next());
        assert!(!feed.has_prev());
    }

    #[tokio::test]
    async fn test_last_partial_page_disables_next() {
        let api = FakeApi::with_count(95);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        for _ in 0..9 {
            let ticket = feed.next_page().expect("next should be enabled");
            run(&mut feed, &api, ticket).await;
        }

        assert_eq!(feed.page(), 10);
        assert_eq!(feed.state().posts().len(), 5);
        assert!(!feed.has_next());
        assert!(feed.next_page().is_none());
        assert!(feed.has_prev());
    }

    #[tokio::test]
    async fn test_exact_multiple_keeps_next_enabled() {
        // Full last page still offers "next", which then shows an empty page
        let api = FakeApi::with_count(10);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        assert!(feed.has_next());

        let ticket = feed.next_page().unwrap();
        run(&mut feed, &api, ticket).await;

        assert!(matches!(feed.state(), FeedState::Browsing { page: 2, posts } if posts.is_empty()));
        assert!(feed.state().error_message().is_none());
        assert!(!feed.has_next());
    }

    #[tokio::test]
    async fn test_fetch_page_never_exceeds_limit() {
        let api = FakeApi::with_count(23);
        for page in 1..=5 {
            let posts = api.fetch_page(page, 7).await.unwrap();
            assert!(posts.len() <= 7);
        }
    }

    #[tokio::test]
    async fn test_search_filters_whole_collection_in_order() {
        let api = FakeApi::new(vec![
            make_post(1, "sunt aut facere repellat"),
            make_post(2, "qui est esse"),
            make_post(3, "ea molestias quasi"),
            make_post(4, "Quis nostrum"),
            make_post(5, "dolorem eum magni"),
            make_post(6, "aliquid QUI eius"),
        ]);
        let mut feed = Feed::new(2);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;

        let ticket = feed.submit_search("qui");
        assert_eq!(ticket.request(), &FeedRequest::Search { query: "qui".to_string() });
        run(&mut feed, &api, ticket).await;

        let ids: Vec<u32> = feed.state().posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
        assert!(feed.is_searching());
        assert_eq!(feed.query(), Some("qui"));
        assert_eq!(api.all_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_search_keeps_surrounding_spaces() {
        let api = FakeApi::new(vec![
            make_post(1, "qui est esse"),
            make_post(2, "Quis nostrum"),
            make_post(3, "aliquid QUI eius"),
        ]);
        let mut feed = Feed::new(10);

        let ticket = feed.submit_search(" qui ");
        assert_eq!(ticket.request(), &FeedRequest::Search { query: " qui ".to_string() });
        run(&mut feed, &api, ticket).await;

        let ids: Vec<u32> = feed.state().posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(feed.query(), Some(" qui "));
    }

    #[tokio::test]
    async fn test_failed_search_stays_in_search_mode() {
        let api = FakeApi::with_count(100);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;

        api.fail_with.set(Some(503));
        let ticket = feed.submit_search("post");
        run(&mut feed, &api, ticket).await;

        assert_eq!(feed.state().error_message(), Some(SEARCH_FAILED_MESSAGE));
        assert!(feed.state().posts().is_empty());
        assert!(feed.is_searching());
        assert!(feed.next_page().is_none());
        assert!(feed.prev_page().is_none());

        // Clearing recovers with a page fetch
        api.fail_with.set(None);
        let ticket = feed.clear_search();
        run(&mut feed, &api, ticket).await;
        assert!(matches!(feed.state(), FeedState::Browsing { page: 1, .. }));
    }

    #[tokio::test]
    async fn test_pagination_inert_while_searching() {
        let api = FakeApi::with_count(100);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        let ticket = feed.submit_search("post");
        run(&mut feed, &api, ticket).await;

        assert!(!feed.has_next());
        assert!(!feed.has_prev());
        assert!(feed.next_page().is_none());
        assert!(feed.prev_page().is_none());
        assert_eq!(feed.page(), 1);
    }

    #[tokio::test]
    async fn test_server_error_shows_message_without_posts() {
        let api = FakeApi::with_count(100);
        api.fail_with.set(Some(500));
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;

        let message = feed.state().error_message().expect("error state");
        assert!(!message.is_empty());
        assert_eq!(message, LOAD_FAILED_MESSAGE);
        assert!(feed.state().posts().is_empty());
        assert!(!feed.has_next());
    }

    #[tokio::test]
    async fn test_clear_search_refetches_page_one_once() {
        let api = FakeApi::with_count(100);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        let ticket = feed.next_page().unwrap();
        run(&mut feed, &api, ticket).await;
        let ticket = feed.submit_search("number 1");
        run(&mut feed, &api, ticket).await;

        let before = api.page_calls.get();
        let ticket = feed.clear_search();
        run(&mut feed, &api, ticket).await;

        assert_eq!(api.page_calls.get(), before + 1);
        assert!(!feed.is_searching());
        assert!(matches!(feed.state(), FeedState::Browsing { page: 1, posts } if posts.len() == 10));
    }

    #[tokio::test]
    async fn test_blank_search_behaves_like_clear() {
        let api = FakeApi::with_count(30);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        let ticket = feed.next_page().unwrap();
        run(&mut feed, &api, ticket).await;
        assert_eq!(feed.page(), 2);

        let ticket = feed.submit_search("   ");
        assert_eq!(ticket.request(), &FeedRequest::Page { page: 1, limit: 10 });
        run(&mut feed, &api, ticket).await;

        // Already browsing page 1: still refetches
        let before = api.page_calls.get();
        let ticket = feed.submit_search("");
        assert_eq!(ticket.request(), &FeedRequest::Page { page: 1, limit: 10 });
        run(&mut feed, &api, ticket).await;
        assert_eq!(api.page_calls.get(), before + 1);
    }

    #[tokio::test]
    async fn test_blank_search_retries_after_error_on_first_page() {
        let api = FakeApi::with_count(30);
        api.fail_with.set(Some(500));
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;
        assert_eq!(feed.state().error_message(), Some(LOAD_FAILED_MESSAGE));

        api.fail_with.set(None);
        let ticket = feed.submit_search("   ");
        assert_eq!(ticket.request(), &FeedRequest::Page { page: 1, limit: 10 });
        assert!(feed.state().is_loading());
        run(&mut feed, &api, ticket).await;

        assert!(matches!(feed.state(), FeedState::Browsing { page: 1, posts } if posts.len() == 10));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let api = FakeApi::with_count(100);
        let mut feed = Feed::new(10);

        let ticket = feed.mount();
        run(&mut feed, &api, ticket).await;

        let to_page_two = feed.next_page().unwrap();
        let to_page_one = feed.prev_page().unwrap();

        // Newer request resolves first, older one after it
        assert!(run(&mut feed, &api, to_page_one).await);
        assert!(!run(&mut feed, &api, to_page_two).await);

        assert!(matches!(feed.state(), FeedState::Browsing { page: 1, .. }));
        assert_eq!(feed.state().posts()[0].id, 1);
    }

    #[tokio::test]
    async fn test_fetch_by_id_missing_is_not_found() {
        let api = FakeApi::with_count(5);

        assert_eq!(api.fetch_by_id(3).await.unwrap().id, 3);
        let err = api.fetch_by_id(42).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
