use clap::{Parser, Subcommand};
use std::sync::Arc;

use echo_bot::application::errors::BotError;
use echo_bot::application::services::UpdateService;
use echo_bot::infrastructure::adapters::TelegramAdapter;
use echo_bot::infrastructure::config::Config;
use echo_bot::infrastructure::server;

#[derive(Parser)]
#[command(name = "echo-bot")]
#[command(about = "Telegram webhook echo bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and TELEGRAM_BOT_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Listen port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run_bot(&cli.config, cli.token, cli.port) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("echo-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            if let Err(e) = init_config() {
                eprintln!("Failed to render config: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(config_path: &str) -> Result<Config, BotError> {
    if !std::path::Path::new(config_path).exists() {
        return Ok(Config::load_env()?);
    }

    let mut config = Config::load(config_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    // Environment wins over the file
    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn run_bot(config_path: &str, token_override: Option<String>, port_override: Option<u16>) -> Result<(), BotError> {
    let mut config = load_config(config_path)?;
    if let Some(token) = token_override {
        config.telegram.token = Some(token);
    }
    if let Some(port) = port_override {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting {}", config.bot.name);

    let adapter = TelegramAdapter::new(&config.telegram)?;
    tracing::info!(
        "Telegram adapter ready (token: {}..., timeout: {}s)",
        adapter.token_hint(),
        config.telegram.timeout_secs
    );

    let service = Arc::new(UpdateService::new(Arc::new(adapter)));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::serve(&config.server, service))?;
    Ok(())
}

fn init_config() -> Result<(), serde_yaml::Error> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
