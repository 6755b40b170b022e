mod handler;

pub use handler::{current_weather, history};
