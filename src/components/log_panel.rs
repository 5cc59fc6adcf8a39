//! Log Panel Component
//!
//! Collapsible view of the most recent lines from the rolling logger.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card};

/// Lines shown at most; the logger may hold more
const MAX_LINES: usize = 50;

/// Newest `max` lines, newest first
fn latest_first(lines: Vec<String>, max: usize) -> Vec<String> {
    lines.into_iter().rev().take(max).collect()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(latest_first(rolling_logger::recent_lines(), MAX_LINES));

    view! {
        <Card title="Diagnostics">
            <div class="flex gap-2 mb-3">
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_: ()| {
                        if !open.get_untracked() {
                            refresh();
                        }
                        set_open.update(|o| *o = !*o);
                    })
                >
                    {move || if open.get() { "Hide recent logs" } else { "Show recent logs" }}
                </Button>
                <Show when=move || open.get()>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_: ()| refresh())
                    >
                        "Refresh"
                    </Button>
                </Show>
            </div>
            <Show when=move || open.get()>
                <Show
                    when=move || !lines.get().is_empty()
                    fallback=|| view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">"No log lines yet."</p>
                    }
                >
                    <pre class="text-xs max-h-64 overflow-auto bg-gray-50 dark:bg-gray-900 p-3 rounded">
                        {move || lines.get().join("\n")}
                    </pre>
                </Show>
            </Show>
        </Card>
    }
}
