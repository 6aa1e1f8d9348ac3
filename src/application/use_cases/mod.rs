mod chat_turn;
mod load_catalog;
mod lookup_response;
mod resolve_intent;

pub use chat_turn::*;
pub use load_catalog::*;
pub use lookup_response::*;
pub use resolve_intent::*;
