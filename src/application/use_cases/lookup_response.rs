use tracing::warn;

use crate::domain::IntentCatalog;

/// Shown when an intent key has no entry in the catalog.
pub const FALLBACK_RESPONSE: &str =
    "Désolé, je n'ai pas compris votre demande. Pouvez-vous reformuler ?";

/// Returns the canned response for `intent_key`, matched case-insensitively.
///
/// Never fails: a key missing from the catalog (including the `unknown` and
/// `empty_input` sentinels, unless the catalog defines them) yields
/// [`FALLBACK_RESPONSE`].
pub fn lookup_response<'a>(catalog: &'a IntentCatalog, intent_key: &str) -> &'a str {
    match catalog.find(intent_key) {
        Some(intent) => intent.response(),
        None => {
            warn!("No response for intent: {}", intent_key);
            FALLBACK_RESPONSE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Intent;

    fn catalog() -> IntentCatalog {
        IntentCatalog::new(vec![
            Intent::new("support_technique", "Redémarrez votre box."),
            Intent::new("unknown", "Pouvez-vous préciser votre demande ?"),
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog();

        assert_eq!(
            lookup_response(&catalog, "Support_Technique"),
            lookup_response(&catalog, "support_technique")
        );
        assert_eq!(
            lookup_response(&catalog, "SUPPORT_TECHNIQUE"),
            "Redémarrez votre box."
        );
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        assert_eq!(lookup_response(&catalog(), "nonexistent"), FALLBACK_RESPONSE);
        assert_eq!(
            lookup_response(&IntentCatalog::empty(), "support_technique"),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn test_catalog_may_define_sentinel_responses() {
        let catalog = catalog();

        assert_eq!(
            lookup_response(&catalog, "unknown"),
            "Pouvez-vous préciser votre demande ?"
        );
        assert_eq!(lookup_response(&catalog, "empty_input"), FALLBACK_RESPONSE);
    }
}
