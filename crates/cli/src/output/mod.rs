pub mod banner;
mod format;
mod table;
pub mod theme;

pub use format::{OutputMode, print_json, print_success, print_error};
pub use table::build_table;
