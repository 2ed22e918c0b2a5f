use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use key_tree::Service;

#[derive(Parser)]
#[command(name = "key_tree")]
#[command(about = "Ordered key tree answering search/insert/delete commands on stdin", long_about = None)]
struct Cli {
    /// JSON file holding the initial array of keys
    #[arg(short, long, default_value = "array.json")]
    filename: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let tree = key_tree::load_tree(&cli.filename).context("unable to start service")?;
    let mut service = Service::new(tree);
    key_tree::service::run(&mut service, io::stdin().lock(), io::stdout().lock())
        .context("unable to process commands")?;
    Ok(())
}
