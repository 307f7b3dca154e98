pub mod maps_sdk;
pub mod places_client;
