//! Post Detail Component
//!
//! Panel for a single post loaded by id, with its author resolved from
//! the users list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use post_feed::{HttpPostsClient, PostsApi};

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::models::{Post, User};

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded { post: Post, author: Option<User> },
    Failed(String),
}

async fn load_detail(client: &HttpPostsClient, id: u32) -> DetailState {
    let post = match client.fetch_by_id(id).await {
        Ok(post) => post,
        Err(e) if e.is_not_found() => return DetailState::Failed(format!("Post #{} not found.", id)),
        Err(_) => return DetailState::Failed("Failed to load post. Please try again.".to_string()),
    };

    // Missing author is not fatal; the post is still shown
    let author = match client.fetch_users().await {
        Ok(users) => users.into_iter().find(|u| u.id == post.user_id),
        Err(e) => {
            log::warn!("[DETAIL] Author lookup failed: {}", e);
            None
        }
    };
    DetailState::Loaded { post, author }
}

#[component]
pub fn PostDetail(
    client: StoredValue<HttpPostsClient>,
    post_id: ReadSignal<Option<u32>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let detail = RwSignal::new(DetailState::Loading);

    Effect::new(move |_| {
        let Some(id) = post_id.get() else { return };
        detail.set(DetailState::Loading);
        let client = client.get_value();
        spawn_local(async move {
            let loaded = load_detail(&client, id).await;
            // Ignore if another post was selected meanwhile
            if post_id.try_get_untracked().flatten() == Some(id) && detail.try_set(loaded).is_some() {
                log::debug!("[DETAIL] Dropped post {} for unmounted view", id);
            }
        });
    });

    view! {
        <Show when=move || post_id.get().is_some()>
            <Card title="Post Details">
                {move || match detail.get() {
                    DetailState::Loading => view! {
                        <p class="text-gray-500 dark:text-gray-400">"Loading post..."</p>
                    }.into_any(),
                    DetailState::Failed(message) => view! {
                        <p class="text-red-600 dark:text-red-400">{message}</p>
                    }.into_any(),
                    DetailState::Loaded { post, author } => view! {
                        <h3 class="text-xl font-semibold mb-2 text-gray-900 dark:text-white capitalize">
                            {post.title}
                        </h3>
                        <p class="text-gray-700 dark:text-gray-300 mb-4 whitespace-pre-line">{post.body}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {match author {
                                Some(user) => format!("By {} (@{}) · {}", user.name, user.username, user.email),
                                None => format!("By user #{}", post.user_id),
                            }}
                        </p>
                    }.into_any(),
                }}
                <div class="mt-4">
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on_click=on_close
                    >
                        "Close"
                    </Button>
                </div>
            </Card>
        </Show>
    }
}
