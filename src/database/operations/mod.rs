pub mod location;

pub use location::{LocationChanges, LocationOperation};
