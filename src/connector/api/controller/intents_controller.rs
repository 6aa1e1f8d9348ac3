use anyhow::Result;

use crate::IntentCatalog;

use super::super::Container;

pub struct IntentsController<'a> {
    container: &'a Container,
}

impl<'a> IntentsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let catalog = self.container.catalog_use_case().execute().await;
        Ok(self.format_catalog(&catalog))
    }

    fn format_catalog(&self, catalog: &IntentCatalog) -> String {
        let source = self.container.catalog_path().display();

        if catalog.is_empty() {
            return format!("No intents loaded from {}.", source);
        }

        let mut output = format!("{} intents loaded from {}:\n\n", catalog.len(), source);
        for intent in catalog.intents() {
            output.push_str(&format!(
                "  {} ({} examples)\n",
                intent.name(),
                intent.examples().len()
            ));
        }

        if !catalog.rejected().is_empty() {
            output.push_str("\nSkipped:\n");
            for rejected in catalog.rejected() {
                output.push_str(&format!("  {:?}: {}\n", rejected.name(), rejected.reason()));
            }
        }

        output
    }
}
