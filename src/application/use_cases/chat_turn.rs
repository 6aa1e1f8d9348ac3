use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::application::{lookup_response, LoadCatalogUseCase, ResolveIntentUseCase};
use crate::domain::IntentKey;

/// Shown in place of a response when a turn fails unexpectedly.
pub const APOLOGY_RESPONSE: &str = "Désolé, une erreur s'est produite. Veuillez réessayer.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    intent: IntentKey,
    response: String,
}

impl ChatReply {
    pub fn new(intent: IntentKey, response: impl Into<String>) -> Self {
        Self {
            intent,
            response: response.into(),
        }
    }

    /// The reply for a turn that failed before producing a response.
    pub fn apology() -> Self {
        Self::new(IntentKey::Unknown, APOLOGY_RESPONSE)
    }

    pub fn intent(&self) -> &IntentKey {
        &self.intent
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// One stateless chat turn: classify the utterance, then look up the
/// response for the detected intent.
pub struct ChatTurnUseCase {
    catalog: Arc<LoadCatalogUseCase>,
    resolver: Arc<ResolveIntentUseCase>,
}

impl ChatTurnUseCase {
    pub fn new(catalog: Arc<LoadCatalogUseCase>, resolver: Arc<ResolveIntentUseCase>) -> Self {
        Self { catalog, resolver }
    }

    pub async fn execute(&self, utterance: &str) -> ChatReply {
        let catalog = self.catalog.execute().await;
        let intent = self.resolver.execute(&catalog, utterance).await;
        let response = lookup_response(&catalog, intent.as_str());

        info!("Chat turn classified as {}", intent);

        ChatReply::new(intent, response)
    }
}
