use clap::Parser;
use hailcast::app::{server, AppConfig, AppContext};
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hailcast", about = "zone-level taxi demand forecast dashboard")]
struct CliArgs {
    /// path to the application TOML configuration
    #[arg(short, long)]
    config_file: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let config = match AppConfig::from_file(Path::new(&args.config_file)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    // resource loading is startup-fatal: without a model and zones there is
    // nothing to serve
    let context = match AppContext::try_from(&config) {
        Ok(context) => context,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let state = server::AppState {
        context: Arc::new(context),
    };
    let listener = match tokio::net::TcpListener::bind(&config.listen_address).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failure binding {}: {e}", config.listen_address);
            std::process::exit(1);
        }
    };
    log::info!("serving dashboard at http://{}", config.listen_address);
    if let Err(e) = axum::serve(listener, server::create_router(state)).await {
        log::error!("{e}");
    }
}
