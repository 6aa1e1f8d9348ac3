use crate::domain::{Intent, IntentCatalog};

/// How many examples of each intent are shown to the model.
const EXAMPLES_PER_INTENT: usize = 2;

/// Renders one catalog entry as `- <name> (ex: <first examples>...)`.
fn render_intent(intent: &Intent) -> String {
    let examples = intent
        .examples()
        .iter()
        .take(EXAMPLES_PER_INTENT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!("- {} (ex: {}...)", intent.name(), examples)
}

/// Builds the few-shot classification prompt for `utterance`.
///
/// The output depends only on the catalog (in load order) and the utterance,
/// so identical inputs always produce byte-identical prompts. The utterance is
/// inserted verbatim near the end of the template.
///
/// The catalog is expected to be non-empty; callers short-circuit before
/// classifying against an empty catalog.
pub fn build_prompt(catalog: &IntentCatalog, utterance: &str) -> String {
    let formatted_intents = catalog
        .intents()
        .iter()
        .map(render_intent)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"### Rôle :
Vous êtes un classificateur d'intentions expert. Analysez strictement la question et choisissez UNIQUEMENT parmi ces intentions :

{formatted_intents}

### Règles strictes :
- Répondez UNIQUEMENT par le NOM EXACT de l'intention (identique à la liste)
- Si incertain, répondez 'unknown'
- Jamais d'explications ou de texte supplémentaire

### Exemples valides :
Question: "Comment obtenir un devis ?"
Réponse: demande_prix

Question: "Le site ne marche pas"
Réponse: support_technique

### Question à analyser :
"{utterance}"

### Réponse (nom d'intention uniquement) :
"#
    )
}
