//! Navbar Component
//!
//! Brand, page links, theme toggle, and a collapsible menu on small screens.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::theme::Theme;

fn link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-700 dark:bg-gray-700 dark:text-white"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
    }
}

#[component]
pub fn Navbar(theme: ReadSignal<Theme>, on_toggle_theme: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        Page::ALL
            .iter()
            .map(|&page| {
                view! {
                    <button
                        class=move || link_class(ctx.current_page.get() == page)
                        on:click=move |_| {
                            ctx.navigate(page);
                            set_menu_open.set(false);
                        }
                    >
                        {page.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="bg-white dark:bg-gray-800 shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <button
                        class="text-xl font-bold text-blue-600 dark:text-blue-400"
                        on:click=move |_| ctx.navigate(Page::Home)
                    >
                        "PLP Task Manager"
                    </button>

                    <div class="hidden md:flex items-center gap-2">
                        {links}
                        <button
                            class="ml-2 p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-700"
                            title="Toggle theme"
                            on:click=move |_| on_toggle_theme.run(())
                        >
                            {move || theme.get().toggle_icon()}
                        </button>
                    </div>

                    <div class="md:hidden flex items-center gap-2">
                        <button
                            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-700"
                            title="Toggle theme"
                            on:click=move |_| on_toggle_theme.run(())
                        >
                            {move || theme.get().toggle_icon()}
                        </button>
                        <button
                            class="p-2 rounded-md text-gray-700 dark:text-gray-300"
                            title="Menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden px-4 pb-3 flex flex-col gap-1">{links}</div>
            </Show>
        </nav>
    }
}
