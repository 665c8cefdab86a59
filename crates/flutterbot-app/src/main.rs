mod boot;
mod cli;
mod dotenv;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use flutterbot_ai::{
    ChatCompletionClient, ConversationSession, GatewayConfig, SessionHandle, TurnOutcome,
};
use flutterbot_common::EventBus;
use flutterbot_config::FlutterbotConfig;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a .env file
    let dotenv_path = dotenv::load();

    let args = cli::parse();

    // Config is loaded before logging so its level can seed the filter
    let loaded = boot::load(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|config| config.logging.level.as_str())
        .unwrap_or("info");
    let level = args.log_level.as_deref().unwrap_or(config_level);
    let fallback = boot::log_directive("info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::try_new(boot::log_directive(level))
                    .unwrap_or_else(|_| EnvFilter::new(fallback))
            }),
        )
        .init();

    tracing::info!("FlutterBot v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FlutterbotConfig::default()
    });
    if let Err(e) = boot::apply_overrides(&mut config, &args) {
        tracing::error!("Invalid command-line override: {e}");
        return ExitCode::FAILURE;
    }
    if args.dump_config {
        println!("{}", flutterbot_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }
    tracing::info!(
        model = %config.gateway.model,
        window = config.session.history_window,
        "Config loaded"
    );

    let api_key = GatewayConfig::from_env(Some(config.gateway.api_key_env.as_str())).api_key;
    let client = match ChatCompletionClient::new(boot::gateway_config(&config.gateway, api_key)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create completion client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bus = Arc::new(EventBus::new(64));
    let session_config = boot::session_config(&config.session, &config.gateway.api_key_env);
    let session = ConversationSession::new(Arc::new(client), session_config)
        .with_event_bus(Arc::clone(&bus));
    let handle = SessionHandle::new(session);

    if let Some(message) = &args.once {
        return match repl::once(&handle, message).await {
            Ok((reply, outcome)) => {
                println!("{reply}");
                if matches!(outcome, TurnOutcome::Failed(_)) {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = repl::run(handle, bus, &config.session.bot_name, stdin).await {
        tracing::error!("Chat loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
