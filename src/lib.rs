pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    lookup_response, CatalogRepository, ChatReply, ChatTurnUseCase, CompletionClient,
    CompletionError, LoadCatalogUseCase, ResolveIntentUseCase, APOLOGY_RESPONSE,
    FALLBACK_RESPONSE,
};

pub use connector::{
    InMemoryCatalogRepository, JsonCatalogRepository, LlamaCppClient, MockCompletionClient,
};

pub use domain::{
    build_prompt, extract_candidate, CompletionRequest, DomainError, Intent, IntentCatalog,
    IntentKey, RejectedIntent, RejectionReason, EMPTY_INPUT_INTENT, UNKNOWN_INTENT,
};
