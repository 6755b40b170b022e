mod handler;
mod model;

pub use handler::{create_location, delete_location, get_location, list_locations, update_location};
