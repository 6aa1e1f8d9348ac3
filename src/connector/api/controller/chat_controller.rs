use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, warn};

use crate::ChatReply;

use super::super::Container;

pub const GREETING: &str =
    "Bonjour ! Je suis votre assistant virtuel. Comment puis-je vous aider aujourd'hui ?";
pub const FAREWELL: &str = "Au revoir !";
const PROMPT_MARKER: &str = "> ";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, message: String) -> Result<String> {
        Ok(self.reply(message).await.response().to_string())
    }

    /// Runs one turn on its own task. A turn that panics is logged and
    /// answered with the apology reply; the caller's session carries on.
    pub async fn reply(&self, message: String) -> ChatReply {
        let use_case = self.container.chat_turn_use_case();
        let logged = message.clone();

        match tokio::spawn(async move { use_case.execute(&message).await }).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Chat turn failed for message {:?}: {}", logged, e);
                ChatReply::apology()
            }
        }
    }

    /// Interactive session: one line in, one response out, until EOF,
    /// `exit` or `quit`. A line that is not valid UTF-8 gets the apology.
    pub async fn session<R, W>(&self, mut input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(format!("{}\n", GREETING).as_bytes()).await?;

        let mut buf = Vec::new();
        loop {
            output.write_all(PROMPT_MARKER.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                output.write_all(b"\n").await?;
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim_end_matches(['\n', '\r']);
                    if matches!(line.trim().to_lowercase().as_str(), "exit" | "quit") {
                        break;
                    }
                    self.reply(line.to_string()).await
                }
                Err(e) => {
                    warn!("Ignoring chat input that is not valid UTF-8: {}", e);
                    ChatReply::apology()
                }
            };
            output
                .write_all(format!("{}\n", reply.response()).as_bytes())
                .await?;
        }

        output.write_all(format!("{}\n", FAREWELL).as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
