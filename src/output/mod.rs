mod json;
mod text;

pub use json::write_report;
pub use text::{draw_bin, render_summary};
