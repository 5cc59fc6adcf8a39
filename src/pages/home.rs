//! Home Page
//!
//! Hero, feature cards, and the technology stack.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::context::{use_app_context, Page};

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    link: Option<Page>,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Task Management",
        description: "Create, manage, and track your tasks with an intuitive interface.",
        icon: "✓",
        link: Some(Page::Tasks),
    },
    Feature {
        title: "API Integration",
        description: "Fetch and display data from external APIs with pagination and search.",
        icon: "🔌",
        link: Some(Page::ApiData),
    },
    Feature {
        title: "Dark Mode",
        description: "Toggle between light and dark themes for comfortable viewing.",
        icon: "🌙",
        link: None,
    },
    Feature {
        title: "Responsive Design",
        description: "Works seamlessly on mobile, tablet, and desktop devices.",
        icon: "📱",
        link: None,
    },
];

/// (icon, name, role)
const STACK: &[(&str, &str, &str)] = &[
    ("🦀", "Rust", "Language"),
    ("⚡", "Leptos", "UI Framework"),
    ("🎨", "Tailwind CSS", "Styling"),
    ("🌐", "WebAssembly", "Runtime"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                    "Welcome to PLP Task Manager"
                </h1>
                <p class="text-xl text-gray-600 dark:text-gray-400 mb-8 max-w-3xl mx-auto">
                    "A responsive task management application built with Rust, Leptos and Tailwind CSS. "
                    "Manage your tasks efficiently with a clean user interface."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button size=ButtonSize::Lg on_click=Callback::new(move |_: ()| ctx.navigate(Page::Tasks))>
                        "Get Started"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Lg
                        on_click=Callback::new(move |_: ()| ctx.navigate(Page::ApiData))
                    >
                        "View API Demo"
                    </Button>
                </div>
            </div>

            <div class="mb-16">
                <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white mb-8">"Features"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES.iter().map(|feature| view! {
                        <Card class="text-center hover:scale-105 transition-transform">
                            <div class="text-4xl mb-4">{feature.icon}</div>
                            <h3 class="text-xl font-semibold mb-2 text-gray-900 dark:text-white">{feature.title}</h3>
                            <p class="text-gray-600 dark:text-gray-400 text-sm mb-4">{feature.description}</p>
                            {feature.link.map(|page| view! {
                                <Button size=ButtonSize::Sm on_click=Callback::new(move |_: ()| ctx.navigate(page))>
                                    "Learn More"
                                </Button>
                            })}
                        </Card>
                    }).collect_view()}
                </div>
            </div>

            <Card title="Built With">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 text-center">
                    {STACK.iter().map(|(icon, name, role)| view! {
                        <div>
                            <div class="text-3xl mb-2">{*icon}</div>
                            <h4 class="font-semibold text-gray-900 dark:text-white">{*name}</h4>
                            <p class="text-sm text-gray-600 dark:text-gray-400">{*role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}
