//! Normal distribution explorer server binary

use std::sync::Arc;

use clap::Parser;
use normviz_server::{AppState, config, config::Config, router};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "normviz_server=debug,tower_http=debug".into()),
        )
        .init();

    // Parse CLI args
    let config = Config::parse();
    info!(
        "Starting normviz-server on {}:{} (theme: {})",
        config.host, config.port, config.theme
    );
    if let Some(seed) = config.seed {
        info!("Sampling with fixed seed {}", seed);
    }

    let state = Arc::new(AppState::new(config.clone()));
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if let (Some(cert_path), Some(key_path)) = (&config.tls_cert, &config.tls_key) {
        info!("TLS enabled with cert: {}", cert_path);
        let tls_config = config::load_tls_config(cert_path, key_path)?;
        open_browser(&config, &format!("https://{addr}"));

        axum_server::from_tcp_rustls(listener.into_std()?, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        info!("Listening on http://{}", addr);
        open_browser(&config, &format!("http://{addr}"));
        axum::serve(listener, app).await?;
    }

    Ok(())
}

fn open_browser(config: &Config, url: &str) {
    if !config.open {
        return;
    }
    if let Err(e) = open::that(url) {
        warn!("Could not open {} in a browser: {}", url, e);
    }
}
