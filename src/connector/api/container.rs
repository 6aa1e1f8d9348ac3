use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::{CatalogRepository, CompletionClient};
use crate::{
    ChatTurnUseCase, JsonCatalogRepository, LlamaCppClient, LoadCatalogUseCase,
    ResolveIntentUseCase,
};

pub struct ContainerConfig {
    pub llm_server_url: String,
    pub llm_timeout: Duration,
    pub catalog_path: PathBuf,
    /// Load the catalog once per process instead of on every turn.
    pub cache_enabled: bool,
}

/// Wires adapters into use cases. Shared read-only across concurrent turns.
pub struct Container {
    load_catalog: Arc<LoadCatalogUseCase>,
    resolver: Arc<ResolveIntentUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        debug!(
            "Using LLM server at {} (timeout {:?})",
            config.llm_server_url, config.llm_timeout
        );
        let client = Arc::new(LlamaCppClient::new(
            config.llm_server_url.clone(),
            config.llm_timeout,
        ));

        debug!(
            "Using intent catalog at {} (cache_enabled={})",
            config.catalog_path.display(),
            config.cache_enabled
        );
        let repository = Arc::new(JsonCatalogRepository::new(config.catalog_path.clone()));

        Self::with_adapters(config, repository, client)
    }

    /// Builds a container around explicit adapters; the URL and path in
    /// `config` are then informational only.
    pub fn with_adapters(
        config: ContainerConfig,
        repository: Arc<dyn CatalogRepository>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        let load_catalog = if config.cache_enabled {
            LoadCatalogUseCase::new(repository)
        } else {
            LoadCatalogUseCase::uncached(repository)
        };

        Self {
            load_catalog: Arc::new(load_catalog),
            resolver: Arc::new(ResolveIntentUseCase::new(client)),
            config,
        }
    }

    pub fn chat_turn_use_case(&self) -> ChatTurnUseCase {
        ChatTurnUseCase::new(self.load_catalog.clone(), self.resolver.clone())
    }

    pub fn resolve_use_case(&self) -> Arc<ResolveIntentUseCase> {
        self.resolver.clone()
    }

    pub fn catalog_use_case(&self) -> Arc<LoadCatalogUseCase> {
        self.load_catalog.clone()
    }

    pub fn catalog_path(&self) -> &std::path::Path {
        &self.config.catalog_path
    }
}
