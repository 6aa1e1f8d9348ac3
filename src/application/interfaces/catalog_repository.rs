use async_trait::async_trait;

use crate::domain::{DomainError, IntentCatalog};

/// Backing store the intent catalog is loaded from.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Reads and builds the catalog. Each call goes back to the store.
    async fn load(&self) -> Result<IntentCatalog, DomainError>;

    /// Where the catalog comes from, for logging.
    fn source(&self) -> String;
}
