mod catalog_repository;
mod completion_client;

pub use catalog_repository::*;
pub use completion_client::*;
