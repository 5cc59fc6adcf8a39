//! Card Component
//!
//! Boxed content with an optional title bar.

use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class={format!(
            "bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden transition-all hover:shadow-lg {}",
            class
        )}>
            {title.map(|title| view! {
                <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
                </div>
            })}
            <div class="p-6">{children()}</div>
        </div>
    }
}
