use std::sync::Arc;

use clap::Parser;
use prepster::{gemini, gemini::GeminiClient, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// API key for the generative language service.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Model that writes the study pack.
    #[arg(long, env, default_value = gemini::DEFAULT_ANALYSIS_MODEL)]
    analysis_model: String,

    /// Model that draws the topic illustration.
    #[arg(long, env = "GEMINI_MODEL", default_value = gemini::DEFAULT_IMAGE_MODEL)]
    image_model: String,

    /// Base URL of the generative language API.
    #[arg(long, env, default_value = gemini::DEFAULT_BASE_URL)]
    gemini_base_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark session cookies as `Secure` (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,prepster=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    if args.gemini_api_key.as_deref().unwrap_or_default().is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, every analysis will fail");
    }

    let service = GeminiClient::new(args.gemini_api_key)
        .with_base_url(args.gemini_base_url)
        .with_models(args.analysis_model, args.image_model);
    let state = AppState::new(Arc::new(service), args.secure_cookies);
    state.sessions.spawn_pruner(names::SESSION_SWEEP_INTERVAL);
    let app = prepster::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
