mod error_handler;

pub use error_handler::{handle_panic, log_errors};
