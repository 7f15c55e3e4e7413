//! Server configuration

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use normviz::theme::Theme;
use rustls::pki_types::CertificateDer;

/// Normal distribution explorer
#[derive(Parser, Clone, Debug)]
#[command(name = "normviz-server")]
#[command(about = "Serves an interactive normal distribution explorer")]
pub struct Config {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8501")]
    pub port: u16,

    /// Page styling: card or plain
    #[arg(long, default_value_t = Theme::Card)]
    pub theme: Theme,

    /// Fixed sampling seed; every interaction draws a new one when unset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plot width in pixels
    #[arg(long, default_value = "800")]
    pub plot_width: u32,

    /// Plot height in pixels
    #[arg(long, default_value = "500")]
    pub plot_height: u32,

    /// Open the page in a browser once listening
    #[arg(long)]
    pub open: bool,

    /// TLS certificate path (PEM format)
    #[arg(long)]
    pub tls_cert: Option<String>,

    /// TLS private key path (PEM format)
    #[arg(long)]
    pub tls_key: Option<String>,
}

impl Config {
    pub fn plot_size(&self) -> (u32, u32) {
        (self.plot_width.max(100), self.plot_height.max(100))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["normviz-server"])
    }
}

/// Load TLS configuration from cert and key files
pub fn load_tls_config(cert_path: &str, key_path: &str) -> anyhow::Result<RustlsConfig> {
    let cert_file = File::open(cert_path)?;
    let key_file = File::open(key_path)?;

    let mut cert_reader = BufReader::new(cert_file);
    let mut key_reader = BufReader::new(key_file);

    let certs: Vec<CertificateDer<'static>> =
        rustls_pemfile::certs(&mut cert_reader).collect::<Result<Vec<_>, _>>()?;

    let key = rustls_pemfile::private_key(&mut key_reader)?
        .ok_or_else(|| anyhow::anyhow!("No private key found in {}", key_path))?;

    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)?;

    Ok(RustlsConfig::from_config(Arc::new(config)))
}
