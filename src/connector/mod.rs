//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - LLM completion (llama.cpp HTTP server, scripted mock)
//! - Intent catalog storage (JSON file, in-memory)
//! - Chat surfaces (CLI router and controllers, HTTP server)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
