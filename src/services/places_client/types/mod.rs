pub mod error_info;
pub mod filter_request_data;
pub mod place;
