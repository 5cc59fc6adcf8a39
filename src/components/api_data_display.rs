//! API Data Display Component
//!
//! Paginated posts from JSONPlaceholder with title search. State lives in a
//! `post_feed::Feed`; each network action gets a ticket, and only the
//! latest ticket's result is applied.

use leptos::prelude::*;
use leptos::task::spawn_local;
use post_feed::{execute, Feed, FeedState, HttpPostsClient, Ticket};

use crate::components::{Button, ButtonVariant, Card, PostDetail};
use crate::models::Post;

/// Run a ticket in the background and hand the outcome back to the feed
fn dispatch(feed: RwSignal<Feed>, client: StoredValue<HttpPostsClient>, ticket: Ticket) {
    let client = client.get_value();
    spawn_local(async move {
        let outcome = execute(&client, ticket.request()).await;
        // Component may have been unmounted meanwhile
        if feed.try_update(|f| f.complete(ticket, outcome)).is_none() {
            log::debug!("[FEED] Dropped response for unmounted view");
        }
    });
}

#[component]
pub fn ApiDataDisplay(client: HttpPostsClient, page_size: u32) -> impl IntoView {
    let client = StoredValue::new(client);
    let feed = RwSignal::new(Feed::new(page_size));
    let (search_query, set_search_query) = signal(String::new());
    let (selected_post, set_selected_post) = signal::<Option<u32>>(None);

    // Load first page on mount
    Effect::new(move |_| {
        if let Some(ticket) = feed.try_update(|f| f.mount()) {
            dispatch(feed, client, ticket);
        }
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = search_query.get_untracked();
        if let Some(ticket) = feed.try_update(|f| f.submit_search(&raw)) {
            dispatch(feed, client, ticket);
        }
    };

    let clear_search = Callback::new(move |_: ()| {
        set_search_query.set(String::new());
        if let Some(ticket) = feed.try_update(|f| f.clear_search()) {
            dispatch(feed, client, ticket);
        }
    });

    let next_page = Callback::new(move |_: ()| {
        if let Some(ticket) = feed.try_update(|f| f.next_page()).flatten() {
            dispatch(feed, client, ticket);
        }
    });

    let prev_page = Callback::new(move |_: ()| {
        if let Some(ticket) = feed.try_update(|f| f.prev_page()).flatten() {
            dispatch(feed, client, ticket);
        }
    });

    let on_select = Callback::new(move |id: u32| set_selected_post.set(Some(id)));
    let is_searching = move || feed.with(|f| f.is_searching());

    view! {
        <div class="space-y-6">
            <Card title="API Data from JSONPlaceholder">
                <form class="mb-6" on:submit=on_search>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            placeholder="Search posts by title..."
                            class="flex-grow px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            prop:value=move || search_query.get()
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                        />
                        <Button button_type="submit">"Search"</Button>
                        <Show when=is_searching>
                            <Button variant=ButtonVariant::Secondary on_click=clear_search>
                                "Clear"
                            </Button>
                        </Show>
                    </div>
                </form>

                {move || {
                    let state = feed.with(|f| f.state().clone());
                    match state {
                        FeedState::Loading => view! {
                            <div class="flex justify-center items-center py-12">
                                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                            </div>
                        }.into_any(),
                        FeedState::Error { message } => view! {
                            <div class="bg-red-100 dark:bg-red-900 border border-red-400 dark:border-red-700 text-red-700 dark:text-red-200 px-4 py-3 rounded relative">
                                <strong class="font-bold">"Error: "</strong>
                                <span class="block sm:inline">{message}</span>
                            </div>
                        }.into_any(),
                        FeedState::Browsing { page, posts } => {
                            let show_controls = !posts.is_empty();
                            view! {
                                <PostGrid posts=posts on_select=on_select />
                                {show_controls.then(|| view! {
                                    <div class="flex justify-center items-center gap-4 mt-6">
                                        <Button
                                            variant=ButtonVariant::Secondary
                                            disabled=Signal::derive(move || !feed.with(|f| f.has_prev()))
                                            on_click=prev_page
                                        >
                                            "Previous"
                                        </Button>
                                        <span class="text-gray-700 dark:text-gray-300">"Page " {page}</span>
                                        <Button
                                            variant=ButtonVariant::Secondary
                                            disabled=Signal::derive(move || !feed.with(|f| f.has_next()))
                                            on_click=next_page
                                        >
                                            "Next"
                                        </Button>
                                    </div>
                                })}
                            }.into_any()
                        }
                        FeedState::Searching { query, posts } => {
                            let count = posts.len();
                            view! {
                                <PostGrid posts=posts on_select=on_select />
                                <p class="text-center text-gray-500 dark:text-gray-400 mt-4">
                                    {format!("Found {} result(s) for \"{}\"", count, query)}
                                </p>
                            }.into_any()
                        }
                    }
                }}
            </Card>

            <PostDetail
                client=client
                post_id=selected_post
                on_close=Callback::new(move |_: ()| set_selected_post.set(None))
            />
        </div>
    }
}

/// Grid of post cards, or an empty-state message
#[component]
fn PostGrid(posts: Vec<Post>, on_select: Callback<u32>) -> impl IntoView {
    if posts.is_empty() {
        return view! {
            <p class="text-center text-gray-500 dark:text-gray-400 py-8">"No posts found."</p>
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {posts.into_iter().map(|post| {
                let id = post.id;
                view! {
                    <div
                        class="p-4 border rounded-lg hover:shadow-md transition-shadow cursor-pointer dark:border-gray-700 bg-gray-50 dark:bg-gray-700"
                        on:click=move |_| on_select.run(id)
                    >
                        <h3 class="text-lg font-semibold mb-2 text-gray-900 dark:text-white capitalize">
                            {post.title}
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 text-sm line-clamp-3">{post.body}</p>
                        <div class="mt-3 flex items-center justify-between">
                            <span class="text-xs text-gray-500 dark:text-gray-400">"Post ID: " {post.id}</span>
                            <span class="text-xs text-gray-500 dark:text-gray-400">"User ID: " {post.user_id}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}
