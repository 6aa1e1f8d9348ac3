mod in_memory_catalog_repository;
mod json_catalog_repository;
mod llama_cpp_client;
mod mock_completion_client;

pub use in_memory_catalog_repository::*;
pub use json_catalog_repository::*;
pub use llama_cpp_client::*;
pub use mock_completion_client::*;
