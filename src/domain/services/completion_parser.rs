use crate::domain::IntentCatalog;

/// Pulls the candidate intent name out of a raw completion.
///
/// Models sometimes prefix the answer with prose ("I think it's demande_prix")
/// despite the instructions, so only the last whitespace-delimited token is
/// kept. Returns `None` for a blank completion.
pub fn extract_candidate(raw: &str) -> Option<&str> {
    raw.split_whitespace().last()
}

/// Matches a raw completion against the catalog, returning the registered
/// spelling of the intent it names.
pub fn match_completion<'a>(catalog: &'a IntentCatalog, raw: &str) -> Option<&'a str> {
    extract_candidate(raw).and_then(|candidate| catalog.canonical_name(candidate))
}
