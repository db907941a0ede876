mod action;
mod effects;
mod handler;
pub mod headless;
mod runtime;
mod state;

pub use action::Action;
pub use runtime::run_tui;
pub use state::{AppState, NoticeLevel};
