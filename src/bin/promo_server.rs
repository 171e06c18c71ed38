//! promo_server - serve personalised GICLUB promotional PDFs
//!
//! Usage:
//!   promo_server --bind 0.0.0.0:3000 --base-url https://giclub.online
//!   promo_server --config promo.json --workers 4
//!
//! Then: GET /api/promotion/pdf?wallet=0x...&type=brochure|income|matrix|flyer

use clap::Parser;
use promo_pdf::service::{PromoServer, ServiceConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Serve GICLUB brochures and flyers over HTTP.
#[derive(Parser, Debug)]
#[command(name = "promo_server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<String>,

    /// Origin used in referral links (defaults to $APP_URL, then
    /// $NEXT_PUBLIC_APP_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Number of request worker threads
    #[arg(short, long)]
    workers: Option<usize>,

    /// Flate-compress page content streams
    #[arg(long)]
    compress: bool,
}

impl Args {
    /// Defaults or the JSON file, then the environment, then flags.
    /// Blank base URLs from either source are ignored.
    fn into_config<F>(self, env: F) -> promo_pdf::Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_json_file(path)?,
            None => ServiceConfig::default(),
        }
        .with_env_lookup(env);
        if let Some(bind) = self.bind {
            config = config.with_bind(bind);
        }
        if let Some(base_url) = self.base_url.filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if self.compress {
            config = config.with_compress(true);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Args::parse()
        .into_config(|name| std::env::var(name).ok())
        .and_then(|config| PromoServer::bind(&config))
        .and_then(|server| server.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
