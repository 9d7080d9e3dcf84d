//! Application State
//!
//! Routing state for the site shell: the current page identifier and the
//! pending scroll reset. Owned by the application root and passed down;
//! panels render it but never own it.

mod app_state;
mod types;

pub use app_state::AppState;
pub use types::PageId;
