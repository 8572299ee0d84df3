pub mod logging;
pub mod paths;
pub mod terminal;

pub use paths::{LOG_FILE_NAME, ensure_dir, format_path_with_tilde, resolve_data_dir};
pub use terminal::sanitize_label;
