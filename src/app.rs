//! PLP Task Manager App
//!
//! Application shell: theme owner, page switching, and the posts client.

use leptos::prelude::*;
use post_feed::{FeedConfig, HttpPostsClient};
use reactive_stores::Store;

use crate::components::Layout;
use crate::context::{initial_page, AppContext, Page};
use crate::pages::{ApiDataPage, HomePage, TasksPage};
use crate::store::AppState;
use crate::theme::ThemeController;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of the theme preference
    let theme = ThemeController::new();

    let (current_page, set_current_page) = signal(initial_page());
    provide_context(AppContext::new((current_page, set_current_page)));
    provide_context(Store::new(AppState::new()));

    let config = FeedConfig::from_env().unwrap_or_else(|e| {
        log::warn!("[APP] Invalid feed config, using defaults: {}", e);
        FeedConfig::default()
    });
    log::info!("[APP] Posts API at {} ({} per page)", config.base_url, config.page_size);
    let client = HttpPostsClient::from_config(&config);
    let page_size = config.page_size;

    view! {
        <Layout
            theme=theme.theme()
            on_toggle_theme=Callback::new(move |_: ()| theme.toggle())
        >
            {move || match current_page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Tasks => view! { <TasksPage /> }.into_any(),
                Page::ApiData => view! {
                    <ApiDataPage client=client.clone() page_size=page_size />
                }.into_any(),
            }}
        </Layout>
    }
}
