use anyhow::Result;

use super::super::Container;

pub struct ClassifyController<'a> {
    container: &'a Container,
}

impl<'a> ClassifyController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn classify(&self, message: String) -> Result<String> {
        let catalog = self.container.catalog_use_case().execute().await;
        let intent = self
            .container
            .resolve_use_case()
            .execute(&catalog, &message)
            .await;

        Ok(intent.to_string())
    }
}
