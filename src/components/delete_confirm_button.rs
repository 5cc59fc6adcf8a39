//! Delete Confirm Button Component
//!
//! Inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <Button
                variant=ButtonVariant::Danger
                size=ButtonSize::Sm
                on_click=Callback::new(move |_: ()| set_confirm_delete.set(true))
            >
                "Delete"
            </Button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="inline-flex items-center gap-1 text-sm">
                <span class="text-red-600 dark:text-red-400">"Delete?"</span>
                <button
                    class="px-2 rounded text-green-700 hover:bg-green-100 dark:text-green-400 dark:hover:bg-gray-700"
                    title="Confirm"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="px-2 rounded text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                    title="Cancel"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
