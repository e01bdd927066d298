pub mod formatter;

pub use formatter::{format_stuck_line, should_use_colors};
