pub mod geolocation;
pub mod map_loader;
pub mod types;
