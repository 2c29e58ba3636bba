//! Mergington Activity Board - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington_board::ports::outbound::RawApiPort;
use mergington_board::runner::{config::RunnerConfig, RunnerDeps};

fn main() {
    // .env may set RUST_LOG, so it is read before the subscriber starts.
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv = dotenvy::dotenv();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mergington_board=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Mergington Activity Board");

    #[cfg(not(target_arch = "wasm32"))]
    let config = {
        match dotenv {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Could not read .env"),
        }

        match RunnerConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = ?e, "Invalid configuration");
                return;
            }
        }
    };

    #[cfg(target_arch = "wasm32")]
    let config = RunnerConfig::for_web();

    tracing::info!(api = %config.api_base_url, "Using activities API");

    // Platform
    let platform = mergington_board::infrastructure::platform::create_platform();

    // HTTP
    let raw_api = match mergington_board::infrastructure::http_client::ApiAdapter::new(
        config.http_config(),
    ) {
        Ok(adapter) => adapter,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create HTTP client");
            return;
        }
    };
    let raw_api: Arc<dyn RawApiPort> = Arc::new(raw_api);
    let api = mergington_board::application::api::Api::new(raw_api);

    mergington_board::runner::run(RunnerDeps { platform, api });
}
