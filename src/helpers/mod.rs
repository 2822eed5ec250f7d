pub mod error_log;
pub mod file_fetcher;

pub use error_log::ErrorLog;
pub use file_fetcher::fetch_to_file;
