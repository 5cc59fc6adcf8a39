//! Footer Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-white dark:bg-gray-800 shadow-lg mt-auto">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-lg font-bold text-blue-600 dark:text-blue-400 mb-2">
                            "PLP Task Manager"
                        </h3>
                        <p class="text-gray-600 dark:text-gray-400 text-sm">
                            "A task management application built with Rust, Leptos and Tailwind CSS."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-gray-900 dark:text-white mb-3 uppercase">
                            "Quick Links"
                        </h4>
                        <ul class="space-y-2">
                            {Page::ALL.iter().map(|&page| view! {
                                <li>
                                    <button
                                        class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 text-sm transition-colors"
                                        on:click=move |_| ctx.navigate(page)
                                    >
                                        {page.label()}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-gray-900 dark:text-white mb-3 uppercase">
                            "Connect"
                        </h4>
                        <ul class="space-y-2">
                            {SOCIAL_LINKS.iter().map(|(label, url)| view! {
                                <li>
                                    <a
                                        href=*url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 text-sm transition-colors"
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-gray-200 dark:border-gray-700">
                    <p class="text-center text-gray-500 dark:text-gray-400 text-sm">
                        "© " {year} " PLP Task Manager. All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}
