use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session on stdin/stdout
    Chat,

    /// Answer a single message and exit
    Ask { message: String },

    /// Print the intent key a message resolves to
    Classify { message: String },

    /// Print the classification prompt for a message without calling the LLM
    Prompt { message: String },

    /// List the intents loaded from the catalog
    Intents,

    /// Serve the chat over HTTP
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}

/// Parses an on/off environment flag: `true`, `1` and `yes` (any case) are
/// on, anything else is off.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    ))
}
