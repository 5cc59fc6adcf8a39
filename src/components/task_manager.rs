//! Task Manager Component
//!
//! Add, complete, filter and delete tasks held in the app store.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, DeleteConfirmButton};
use crate::models::TaskFilter;
use crate::store::{
    store_add_task, store_clear_completed, store_remove_task, store_toggle_task, use_app_store,
    AppStateStoreFields,
};
use crate::tasks;

#[component]
pub fn TaskManager() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());
    let (filter, set_filter) = signal(TaskFilter::All);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_task(&store, &new_text.get_untracked()).is_some() {
            set_new_text.set(String::new());
        }
    };

    let visible = move || tasks::visible_tasks(&store.tasks().read(), filter.get());
    let remaining = move || tasks::remaining(&store.tasks().read());
    let has_completed = move || store.tasks().read().iter().any(|t| t.completed);

    view! {
        <Card>
            <form class="flex gap-2 mb-6" on:submit=add_task>
                <input
                    type="text"
                    placeholder="Add a new task..."
                    class="flex-grow px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <Button button_type="submit">"Add Task"</Button>
            </form>

            <div class="flex gap-2 mb-4">
                {TaskFilter::ALL.iter().map(|&option| {
                    let active = Signal::derive(move || filter.get() == option);
                    view! {
                        <button
                            class=move || if active.get() {
                                "px-3 py-1 text-sm rounded-lg bg-blue-600 text-white"
                            } else {
                                "px-3 py-1 text-sm rounded-lg bg-gray-200 text-gray-800 dark:bg-gray-700 dark:text-gray-200"
                            }
                            on:click=move |_| set_filter.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! {
                    <p class="text-center text-gray-500 dark:text-gray-400 py-8">"No tasks to show."</p>
                }
            >
                <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=visible
                        key=|task| (task.id, task.completed)
                        children=move |task| {
                            let id = task.id;
                            view! {
                                <li class="flex items-center justify-between py-3">
                                    <label class="flex items-center gap-3 cursor-pointer">
                                        <input
                                            type="checkbox"
                                            class="h-5 w-5"
                                            checked=task.completed
                                            on:change=move |_| store_toggle_task(&store, id)
                                        />
                                        <span class={if task.completed {
                                            "line-through text-gray-500 dark:text-gray-400"
                                        } else {
                                            "text-gray-900 dark:text-white"
                                        }}>
                                            {task.text.clone()}
                                        </span>
                                    </label>
                                    <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| store_remove_task(&store, id)) />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="flex items-center justify-between mt-6 text-sm text-gray-600 dark:text-gray-400">
                <span>
                    {move || match remaining() {
                        1 => "1 task remaining".to_string(),
                        n => format!("{} tasks remaining", n),
                    }}
                </span>
                <Show when=has_completed>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_: ()| store_clear_completed(&store))
                    >
                        "Clear Completed"
                    </Button>
                </Show>
            </div>
        </Card>
    }
}
