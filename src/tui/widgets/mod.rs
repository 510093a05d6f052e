//! TUI Widgets
//!
//! Custom widgets for the job-lens TUI.

mod controls;
mod detail;

pub use controls::render_controls;
pub use detail::render_detail;
