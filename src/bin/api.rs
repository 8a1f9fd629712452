// src/bin/api.rs
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use train_scrape::api::{self, ApiContext};
use train_scrape::config::options::AppOptions;
use train_scrape::core::net::HttpSource;
use train_scrape::log;

#[derive(Parser, Debug)]
#[command(name = "train_api", version, about = "HTTP API for next train departures")]
struct Args {
    /// Address to listen on (default from config, else 0.0.0.0:8000)
    #[arg(long)]
    bind: Option<String>,

    /// TOML file overriding the built-in defaults
    #[arg(long, env = "TRAIN_SCRAPE_CONFIG")]
    config: Option<PathBuf>,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// -v info, -vv debug (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    // API is chatty by default
    log::init(args.verbose.max(1), args.log_file.as_deref())?;

    let opts = AppOptions::load_or_default(args.config.as_deref())?;
    let bind = args.bind.unwrap_or_else(|| opts.server.bind.clone());

    // Blocking HTTP client lives outside the async runtime.
    let source = Arc::new(HttpSource::new(&opts.net)?);
    let ctx = ApiContext::new(opts, source.clone());

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(api::serve(ctx, &bind))?;
    drop(rt);
    drop(source);
    Ok(())
}
