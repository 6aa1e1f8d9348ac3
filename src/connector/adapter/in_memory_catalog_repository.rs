use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::CatalogRepository;
use crate::domain::{DomainError, Intent, IntentCatalog};

/// Serves a fixed list of intents, counting how often it is loaded.
pub struct InMemoryCatalogRepository {
    intents: Vec<Intent>,
    loads: AtomicUsize,
}

impl InMemoryCatalogRepository {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self {
            intents,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn load(&self) -> Result<IntentCatalog, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        debug!("Building catalog from {} in-memory intents", self.intents.len());
        Ok(IntentCatalog::new(self.intents.clone()))
    }

    fn source(&self) -> String {
        "memory".to_string()
    }
}
