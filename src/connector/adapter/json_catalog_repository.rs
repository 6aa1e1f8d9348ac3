use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CatalogRepository;
use crate::domain::{DomainError, Intent, IntentCatalog};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "config/responses.json";

/// On-disk shape: `{"intents": [{"name", "examples", "response"}, ...]}`.
///
/// Entries are kept as raw values so one malformed intent does not discard
/// the rest of the file.
#[derive(Deserialize)]
struct CatalogDocument {
    intents: Option<Vec<serde_json::Value>>,
}

/// Loads the intent catalog from a JSON file.
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<IntentCatalog, DomainError> {
        let document: CatalogDocument = serde_json::from_str(content).map_err(|e| {
            DomainError::catalog(format!("{}: {}", self.path.display(), e))
        })?;

        let Some(entries) = document.intents else {
            warn!(
                "No \"intents\" key in {}, using an empty catalog",
                self.path.display()
            );
            return Ok(IntentCatalog::empty());
        };

        let total = entries.len();
        let intents: Vec<Intent> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value::<Intent>(entry) {
                Ok(intent) => Some(intent),
                Err(e) => {
                    warn!("Skipping intent #{} in {}: {}", i, self.path.display(), e);
                    None
                }
            })
            .collect();

        debug!(
            "Parsed {}/{} intents from {}",
            intents.len(),
            total,
            self.path.display()
        );

        Ok(IntentCatalog::new(intents))
    }
}

impl Default for JsonCatalogRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn load(&self) -> Result<IntentCatalog, DomainError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DomainError::not_found(format!(
                    "Catalog file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        self.parse(&content)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
