use std::fmt;

use serde::{Serialize, Serializer};

pub const UNKNOWN_INTENT: &str = "unknown";
pub const EMPTY_INPUT_INTENT: &str = "empty_input";

/// Outcome of classifying one utterance.
///
/// `Known` only ever holds a name taken from the catalog the utterance was
/// classified against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentKey {
    Known(String),
    Unknown,
    EmptyInput,
}

impl IntentKey {
    /// Wraps a catalog name, folding the reserved sentinel names into their variants.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            UNKNOWN_INTENT => Self::Unknown,
            EMPTY_INPUT_INTENT => Self::EmptyInput,
            _ => Self::Known(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(name) => name,
            Self::Unknown => UNKNOWN_INTENT,
            Self::EmptyInput => EMPTY_INPUT_INTENT,
        }
    }
}

impl fmt::Display for IntentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IntentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
