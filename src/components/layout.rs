//! Layout Component
//!
//! Navbar, page body, footer. Applies the theme class at the root.

use leptos::prelude::*;

use crate::components::{Footer, Navbar};
use crate::theme::Theme;

#[component]
pub fn Layout(
    theme: ReadSignal<Theme>,
    on_toggle_theme: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || theme.get().root_class()>
            <div class="min-h-screen flex flex-col bg-gray-100 dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Navbar theme=theme on_toggle_theme=on_toggle_theme />
                <main class="flex-grow">{children()}</main>
                <Footer />
            </div>
        </div>
    }
}
