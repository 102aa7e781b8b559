use clap::Parser;
use guardian_core::config::get_default_config_file;
use guardian_core::suggest::Suggester;
use guardian_server::config::{default_http_addr, AppConfig};
use guardian_server::http_server::{self, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "guardian-daemon",
    about = "Backend daemon for the Remote Guardian dashboard"
)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gemini API key
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// HTTP server address
    #[arg(long)]
    http_addr: Option<SocketAddr>,

    /// Upper bound in seconds for one provider round trip
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting Remote Guardian daemon");

    // Pick up GOOGLE_API_KEY from a .env file when present
    dotenvy::dotenv().ok();

    // Parse command line args
    let args = Args::parse();

    // Load config from file or use defaults
    let config_path = args
        .config
        .clone()
        .or_else(|| get_default_config_file().ok());
    let mut config = match &config_path {
        Some(path) => match AppConfig::load_from_file(path) {
            Ok(cfg) => {
                info!("Loaded configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                error!(
                    "Failed to load configuration from {}: {}",
                    path.display(),
                    e
                );
                return Err(anyhow::anyhow!("Configuration error: {}", e));
            }
        },
        None => AppConfig::default(),
    };

    // Update config from CLI args
    if let Some(api_key) = args.api_key {
        config.suggester.api_key = Some(api_key);
    }
    if let Some(model) = args.model {
        config.suggester.model_name = Some(model);
    }
    if let Some(timeout) = args.request_timeout {
        config.suggester.request_timeout_secs = Some(timeout);
    }

    // Initialize the suggestion pipeline; refuse to start without an API key
    let suggester = match Suggester::new(&config.suggester) {
        Ok(suggester) => {
            info!(model = %config.suggester.model_name(), "Initialized suggestion pipeline");
            suggester
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize suggestion pipeline");
            return Err(anyhow::anyhow!(
                "Failed to initialize suggestion pipeline: {}",
                e
            ));
        }
    };

    let addr = args
        .http_addr
        .or(config.http_addr)
        .unwrap_or_else(default_http_addr);
    http_server::run_server(AppState::new(suggester), addr).await
}
