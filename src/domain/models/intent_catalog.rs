use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::intent::fold;
use super::Intent;

/// Why an intent was left out of the catalog at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Another intent already registered the same case-folded name.
    DuplicateName,
    EmptyName,
    /// Completions are reduced to their last word, so such a name can never
    /// match. Leading or trailing padding counts too.
    WhitespaceInName,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName => write!(f, "duplicate name"),
            Self::EmptyName => write!(f, "empty name"),
            Self::WhitespaceInName => write!(f, "name contains whitespace"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedIntent {
    name: String,
    reason: RejectionReason,
}

impl RejectedIntent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }
}

/// The closed set of intents a chat turn can be classified into.
///
/// Built once from loaded data and read-only afterwards, so it can be shared
/// across concurrent turns behind an `Arc` without locking. Lookups by name
/// are case-insensitive.
///
/// Construction never fails: entries that would make the name set ambiguous
/// are dropped (first occurrence wins), logged, and kept in [`rejected`].
///
/// [`rejected`]: IntentCatalog::rejected
#[derive(Debug, Clone, Default)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
    by_name: HashMap<String, usize>,
    rejected: Vec<RejectedIntent>,
}

impl IntentCatalog {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        let mut catalog = Self::default();

        for intent in intents {
            let folded = intent.folded_name();
            let reason = if folded.is_empty() {
                Some(RejectionReason::EmptyName)
            } else if intent.name().chars().any(char::is_whitespace) {
                Some(RejectionReason::WhitespaceInName)
            } else if catalog.by_name.contains_key(&folded) {
                Some(RejectionReason::DuplicateName)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    warn!("Skipping intent {:?}: {}", intent.name(), reason);
                    catalog.rejected.push(RejectedIntent {
                        name: intent.name().to_string(),
                        reason,
                    });
                }
                None => {
                    catalog.by_name.insert(folded, catalog.intents.len());
                    catalog.intents.push(intent);
                }
            }
        }

        catalog
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Intents in load order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(Intent::name)
    }

    pub fn rejected(&self) -> &[RejectedIntent] {
        &self.rejected
    }

    pub fn find(&self, name: &str) -> Option<&Intent> {
        self.by_name
            .get(&fold(name))
            .map(|&index| &self.intents[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Maps any casing of a registered name to the spelling used in the catalog.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.find(name).map(Intent::name)
    }
}
