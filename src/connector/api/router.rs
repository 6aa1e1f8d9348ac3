use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, ClassifyController, IntentsController, PromptController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    classify_controller: ClassifyController<'a>,
    prompt_controller: PromptController<'a>,
    intents_controller: IntentsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            classify_controller: ClassifyController::new(container),
            prompt_controller: PromptController::new(container),
            intents_controller: IntentsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { message } => self.chat_controller.ask(message).await,
            Commands::Classify { message } => self.classify_controller.classify(message).await,
            Commands::Prompt { message } => self.prompt_controller.prompt(message).await,
            Commands::Intents => self.intents_controller.list().await,
            Commands::Chat | Commands::Serve { .. } => {
                bail!("interactive commands are handled separately in main")
            }
        }
    }
}
