pub mod chat_controller;
pub mod classify_controller;
pub mod intents_controller;
pub mod prompt_controller;

pub use chat_controller::ChatController;
pub use classify_controller::ClassifyController;
pub use intents_controller::IntentsController;
pub use prompt_controller::PromptController;
