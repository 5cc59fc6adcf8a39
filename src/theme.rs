//! Theme Preference
//!
//! Light/dark mode. `ThemeController` is created once by `App`; everything
//! else receives the current theme as a signal prop.

use leptos::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class for the layout root; Tailwind `dark:` variants key off it
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button (shows the mode it switches to)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Owner of the theme signal; reads and persists the preference
#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeController {
    pub fn new() -> Self {
        let initial = load_preference();
        log::debug!("[THEME] Starting in {} mode", initial.as_str());
        let (theme, set_theme) = signal(initial);
        Self { theme, set_theme }
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        if let Err(e) = save_preference(next) {
            log::warn!("[THEME] Failed to persist preference: {}", e);
        }
    }
}

fn storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Stored preference, else the system color scheme
fn load_preference() -> Theme {
    let stored = storage()
        .ok()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value));
    if let Some(theme) = stored {
        return theme;
    }

    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

fn save_preference(theme: Theme) -> Result<(), String> {
    storage()?
        .set_item(STORAGE_KEY, theme.as_str())
        .map_err(|e| format!("{:?}", e))
}
