pub mod analyze;

pub use analyze::{api_base_url, read_file, send};
