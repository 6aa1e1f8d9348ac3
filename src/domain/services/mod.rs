//! Pure domain services: prompt rendering and completion parsing.

mod completion_parser;
mod prompt_builder;

pub use completion_parser::*;
pub use prompt_builder::*;
