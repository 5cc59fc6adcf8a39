//! Pages
//!
//! Top-level views switched by the navbar.

mod api_data;
mod home;
mod tasks;

pub use api_data::ApiDataPage;
pub use home::HomePage;
pub use tasks::TasksPage;
