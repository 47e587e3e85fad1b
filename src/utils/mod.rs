pub mod filenames;

pub use filenames::{allocate_output_path, sanitize_title};
