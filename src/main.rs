use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chatdesk::cli::parse_flag;
use chatdesk::connector::api::controller::ChatController;
use chatdesk::connector::api::{server, Container, ContainerConfig, Router};
use chatdesk::Commands;

#[derive(Parser)]
#[command(name = "chatdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "INFO")]
    log_level: String,

    /// Base URL of the llama.cpp completion server
    #[arg(long, global = true, env = "LLM_SERVER_URL", default_value = "http://localhost:8080")]
    llm_server_url: String,

    #[arg(long, global = true, env = "LLM_TIMEOUT_SECS", default_value = "15")]
    llm_timeout_secs: u64,

    /// Intent catalog (JSON)
    #[arg(long, global = true, env = "INTENTS_CONFIG_PATH", default_value = "config/responses.json")]
    catalog: PathBuf,

    /// Load the catalog once per process; when off it is re-read on every turn
    #[arg(
        long,
        global = true,
        env = "CACHE_ENABLED",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    cache_enabled: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Maps a `LOG_LEVEL` value to a level filter. Accepts the tracing names
/// plus `warning` and `critical`; anything else means `INFO`.
fn level_filter(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "warning" => LevelFilter::WARN,
        "critical" | "fatal" => LevelFilter::ERROR,
        other => other.parse().unwrap_or(LevelFilter::INFO),
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        level_filter(&cli.log_level)
    };
    let filter = EnvFilter::default().add_directive(level.into());

    // stdout is the chat surface; logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let container = Arc::new(Container::new(ContainerConfig {
        llm_server_url: cli.llm_server_url.clone(),
        llm_timeout: Duration::from_secs(cli.llm_timeout_secs),
        catalog_path: cli.catalog.clone(),
        cache_enabled: cli.cache_enabled,
    }));

    match cli.command {
        Commands::Chat => {
            // Load up front so a broken catalog is reported before the first turn.
            container.catalog_use_case().execute().await;

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            ChatController::new(&container)
                .session(stdin, tokio::io::stdout())
                .await?;
        }
        Commands::Serve { port, public } => {
            container.catalog_use_case().execute().await;

            let host: [u8; 4] = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
            let addr = SocketAddr::from((host, port));
            info!("Starting chat server on {}", addr);
            server::serve(container, addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
