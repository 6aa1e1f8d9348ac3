use anyhow::Result;

use crate::build_prompt;

use super::super::Container;

pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Renders the classification prompt without contacting the LLM.
    pub async fn prompt(&self, message: String) -> Result<String> {
        let catalog = self.container.catalog_use_case().execute().await;

        if catalog.is_empty() {
            return Ok(format!(
                "No intents loaded from {}; nothing to classify against.",
                self.container.catalog_path().display()
            ));
        }

        Ok(build_prompt(&catalog, &message))
    }
}
