mod completion;
mod intent;
mod intent_catalog;
mod intent_key;

pub use completion::*;
pub use intent::*;
pub use intent_catalog::*;
pub use intent_key::*;
