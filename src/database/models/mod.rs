pub mod location;

pub use location::LocationEntity;
