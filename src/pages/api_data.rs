use leptos::prelude::*;
use post_feed::HttpPostsClient;

use crate::components::{ApiDataDisplay, LogPanel};

#[component]
pub fn ApiDataPage(client: HttpPostsClient, page_size: u32) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">"API Data Integration"</h1>
                <p class="text-gray-600 dark:text-gray-400">
                    "Browse posts from JSONPlaceholder API with pagination and search functionality."
                </p>
            </div>
            <ApiDataDisplay client=client page_size=page_size />
            <div class="mt-6">
                <LogPanel />
            </div>
        </div>
    }
}
