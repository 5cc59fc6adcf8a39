//! Button Component
//!
//! Styled button with variants and sizes.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

const BASE_CLASS: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

/// Full class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
        ButtonVariant::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300 focus:ring-gray-500 dark:bg-gray-700 dark:text-white dark:hover:bg-gray-600",
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
    };
    let size_class = match size {
        ButtonSize::Sm => "px-3 py-1 text-sm",
        ButtonSize::Md => "px-4 py-2",
        ButtonSize::Lg => "px-6 py-3 text-lg",
    };

    let mut class = format!("{} {} {}", BASE_CLASS, variant_class, size_class);
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// HTML button type ("button" or "submit")
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.map(|d| d.get()).unwrap_or(false);

    view! {
        <button
            type=button_type
            class=button_class(variant, size, class)
            disabled=is_disabled
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
