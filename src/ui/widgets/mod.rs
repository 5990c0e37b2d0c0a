//! TUI widgets: header, activity, input, status, command palette.

mod activity;
mod header;
mod input;
mod palette;
mod status;

pub use activity::render as render_activity;
pub use header::render as render_header;
pub use input::render as render_input;
pub use palette::render as render_palette;
pub use status::render as render_status;
