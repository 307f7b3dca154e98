pub mod internal_http_client;
pub mod places_service;
pub mod types;
