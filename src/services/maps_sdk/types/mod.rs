pub mod map_loader_error;
