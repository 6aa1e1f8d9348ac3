use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::application::CatalogRepository;
use crate::domain::IntentCatalog;

/// Supplies the intent catalog to chat turns.
///
/// With caching on, the repository is read at most once per process: the
/// first caller loads while concurrent callers wait on the same cell. A failed
/// load degrades to an empty catalog (every turn then classifies as
/// `unknown`) and is cached like a successful one.
pub struct LoadCatalogUseCase {
    repository: Arc<dyn CatalogRepository>,
    cache: Option<OnceCell<Arc<IntentCatalog>>>,
}

impl LoadCatalogUseCase {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            cache: Some(OnceCell::new()),
        }
    }

    /// Reads the repository on every call.
    pub fn uncached(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            cache: None,
        }
    }

    pub async fn execute(&self) -> Arc<IntentCatalog> {
        match &self.cache {
            Some(cell) => cell.get_or_init(|| self.load_or_empty()).await.clone(),
            None => self.load_or_empty().await,
        }
    }

    async fn load_or_empty(&self) -> Arc<IntentCatalog> {
        let source = self.repository.source();

        match self.repository.load().await {
            Ok(catalog) => {
                info!("Loaded {} intents from {}", catalog.len(), source);
                if !catalog.rejected().is_empty() {
                    warn!(
                        "{} intents in {} were skipped",
                        catalog.rejected().len(),
                        source
                    );
                }
                Arc::new(catalog)
            }
            Err(e) => {
                error!("Failed to load intents from {}: {}", source, e);
                Arc::new(IntentCatalog::empty())
            }
        }
    }
}
