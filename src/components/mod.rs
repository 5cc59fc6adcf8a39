//! UI Components
//!
//! Reusable Leptos components.

mod api_data_display;
mod button;
mod card;
mod delete_confirm_button;
mod footer;
mod layout;
mod log_panel;
mod navbar;
mod post_detail;
mod task_manager;

pub use api_data_display::ApiDataDisplay;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use layout::Layout;
pub use log_panel::LogPanel;
pub use navbar::Navbar;
pub use post_detail::PostDetail;
pub use task_manager::TaskManager;
