pub mod client;
pub mod config;
pub mod device;
pub mod error;
mod json;
pub mod pipeline;
pub mod report;
pub mod thing;

use anyhow::{Context, Result};
use clap::Parser;

use crate::client::ReqwestTransport;
use crate::config::{Credentials, Settings};
use crate::pipeline::Scope;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the settings file
    #[arg(short, long)]
    config: Option<String>,

    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Only list devices
    #[arg(long, conflicts_with = "things_only")]
    devices_only: bool,

    /// Only expand things
    #[arg(long)]
    things_only: bool,
}
impl Args {
    fn scope(&self) -> Scope {
        if self.devices_only {
            Scope::Devices
        } else if self.things_only {
            Scope::Things
        } else {
            Scope::All
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => config::loader::load_from_file(path)
            .with_context(|| format!("failed loading settings from {path}"))?,
        None => Settings::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level()))
        .init();

    if let Err(e) = dotenvy::dotenv() {
        log::debug!("no .env file loaded: {e}");
    }

    let credentials = Credentials::from_env().context("configuration error")?;
    let transport = ReqwestTransport::new(settings.timeout(), settings.tls_insecure())
        .context("failed building http client")?;

    let snapshot = pipeline::run(&transport, &credentials, &settings, args.scope())
        .await
        .context("authentication failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::render(&snapshot));
    }

    Ok(())
}
