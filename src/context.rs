//! Application Context
//!
//! Page navigation shared via Leptos Context API. The current page is
//! mirrored into the URL hash so reloads and shared links land on it.

use leptos::prelude::*;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Tasks,
    ApiData,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Tasks, Page::ApiData];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tasks => "Tasks",
            Page::ApiData => "API Data",
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::Tasks => "#/tasks",
            Page::ApiData => "#/api-data",
        }
    }

    /// Unknown hashes fall back to Home
    pub fn from_hash(hash: &str) -> Page {
        match hash.trim_start_matches('#').trim_end_matches('/') {
            "/tasks" => Page::Tasks,
            "/api-data" => Page::ApiData,
            _ => Page::Home,
        }
    }
}

/// Page named by the current URL hash
pub fn initial_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown - read
    pub current_page: ReadSignal<Page>,
    /// Page being shown - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Switch page and update the URL hash
    pub fn navigate(&self, page: Page) {
        self.set_current_page.set(page);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(page.hash()) {
                log::warn!("[APP] Failed to update location hash: {:?}", e);
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
