use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, warn};

use crate::application::{CompletionClient, CompletionError};
use crate::domain::{build_prompt, match_completion, CompletionRequest, IntentCatalog, IntentKey};

/// Classifies a single utterance against a catalog by asking the LLM.
///
/// Never fails: a blank utterance yields [`IntentKey::EmptyInput`], and an
/// empty catalog, an unrecognised answer or any transport failure yields
/// [`IntentKey::Unknown`]. No retries; the user resends to try again.
pub struct ResolveIntentUseCase {
    client: Arc<dyn CompletionClient>,
}

impl ResolveIntentUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, catalog: &IntentCatalog, utterance: &str) -> IntentKey {
        if utterance.trim().is_empty() {
            return IntentKey::EmptyInput;
        }

        if catalog.is_empty() {
            error!("No intents available for classification");
            return IntentKey::Unknown;
        }

        let request = CompletionRequest::for_classification(build_prompt(catalog, utterance));
        let start_time = Instant::now();

        let raw = match self.client.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                Self::log_failure(&e, self.client.endpoint());
                return IntentKey::Unknown;
            }
        };

        debug!(
            "Completion from {} in {:.2}s: {:?}",
            self.client.endpoint(),
            start_time.elapsed().as_secs_f64(),
            raw
        );

        match match_completion(catalog, &raw) {
            Some(name) => {
                debug!("Valid intent detected: {}", name);
                IntentKey::from_name(name)
            }
            None => {
                debug!("Unknown or invalid intent: {:?}", raw.trim());
                IntentKey::Unknown
            }
        }
    }

    fn log_failure(err: &CompletionError, endpoint: &str) {
        match err {
            CompletionError::Timeout => warn!("LLM server at {} timed out", endpoint),
            CompletionError::Connection(_) | CompletionError::Status { .. } => {
                error!("LLM request to {} failed: {}", endpoint, err)
            }
            CompletionError::MalformedBody(_) | CompletionError::Transport(_) => {
                error!("Unexpected LLM error from {}: {}", endpoint, err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockCompletionClient;
    use crate::domain::Intent;

    fn catalog() -> IntentCatalog {
        IntentCatalog::new(vec![
            Intent::new("demande_prix", "Tarifs").with_examples(["Comment obtenir un devis ?"]),
            Intent::new("support_technique", "Support").with_examples(["Le site ne marche pas"]),
        ])
    }

    async fn resolve(client: MockCompletionClient, catalog: &IntentCatalog, text: &str) -> (IntentKey, usize) {
        let client = Arc::new(client);
        let use_case = ResolveIntentUseCase::new(client.clone());
        let key = use_case.execute(catalog, text).await;
        (key, client.call_count())
    }

    #[tokio::test]
    async fn test_empty_input_skips_llm() {
        for text in ["", "   ", "\n\t"] {
            let (key, calls) =
                resolve(MockCompletionClient::replying("demande_prix"), &catalog(), text).await;
            assert_eq!(key, IntentKey::EmptyInput);
            assert_eq!(calls, 0);
        }
    }

    #[tokio::test]
    async fn test_empty_catalog_skips_llm() {
        let (key, calls) = resolve(
            MockCompletionClient::replying("demande_prix"),
            &IntentCatalog::empty(),
            "Combien ça coûte ?",
        )
        .await;

        assert_eq!(key, IntentKey::Unknown);
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_empty_input_checked_before_catalog() {
        let (key, _) =
            resolve(MockCompletionClient::replying("x"), &IntentCatalog::empty(), " ").await;
        assert_eq!(key, IntentKey::EmptyInput);
    }

    #[tokio::test]
    async fn test_trims_completion() {
        let (key, calls) = resolve(
            MockCompletionClient::replying("  support_technique\n"),
            &catalog(),
            "Ma connexion est coupée",
        )
        .await;

        assert_eq!(key, IntentKey::Known("support_technique".into()));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_takes_last_word_of_chatty_completion() {
        let (key, _) = resolve(
            MockCompletionClient::replying("I think it's demande_prix"),
            &catalog(),
            "Un devis svp",
        )
        .await;

        assert_eq!(key.as_str(), "demande_prix");
    }

    #[tokio::test]
    async fn test_returns_registered_spelling() {
        let (key, _) = resolve(
            MockCompletionClient::replying("DEMANDE_PRIX"),
            &catalog(),
            "prix ?",
        )
        .await;

        assert_eq!(key.as_str(), "demande_prix");
    }

    #[tokio::test]
    async fn test_unlisted_answer_is_unknown() {
        for reply in ["resiliation", "", "demande_prix, support_technique."] {
            let (key, _) =
                resolve(MockCompletionClient::replying(reply), &catalog(), "bonjour").await;
            assert_eq!(key, IntentKey::Unknown, "reply {:?}", reply);
        }
    }

    #[tokio::test]
    async fn test_transport_failures_degrade_to_unknown() {
        let failures = [
            CompletionError::Timeout,
            CompletionError::Connection("refused".into()),
            CompletionError::Status { status: 503 },
            CompletionError::MalformedBody("expected value".into()),
            CompletionError::Transport("reset".into()),
        ];

        for failure in failures {
            let (key, calls) =
                resolve(MockCompletionClient::failing(failure), &catalog(), "bonjour").await;
            assert_eq!(key, IntentKey::Unknown);
            assert_eq!(calls, 1);
        }
    }

    #[tokio::test]
    async fn test_sends_bounded_classification_request() {
        let client = Arc::new(MockCompletionClient::replying("demande_prix"));
        let use_case = ResolveIntentUseCase::new(client.clone());
        let catalog = catalog();

        use_case.execute(&catalog, "Quel est le tarif ?").await;

        let request = client.last_request().unwrap();
        assert_eq!(request.prompt(), build_prompt(&catalog, "Quel est le tarif ?"));
        assert_eq!(request.max_tokens(), 15);
        assert!(request.stop().iter().any(|s| s == "\n"));
    }

    #[tokio::test]
    async fn test_result_is_always_valid() {
        let catalog = catalog();
        let replies = [
            "demande_prix",
            "support_technique",
            "unknown",
            "Je pense que c'est support_technique",
            "???",
            "salut",
        ];

        for reply in replies {
            for text in ["", "prix", "panne réseau"] {
                let (key, _) =
                    resolve(MockCompletionClient::replying(reply), &catalog, text).await;
                let valid = matches!(key, IntentKey::Unknown | IntentKey::EmptyInput)
                    || catalog.names().any(|n| n == key.as_str());
                assert!(valid, "unexpected key {:?}", key);
            }
        }
    }
}
