//! Safari app extension build pipeline CLI

use clap::Parser;
use colored::*;

#[derive(Parser)]
#[command(name = "ext2safari")]
#[command(about = "Build a macOS Safari app extension from a web extension source tree", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();

    let result = ext2safari::cli::resolve_config().and_then(|config| ext2safari::cli::run(&config));
    if let Err(err) = result {
        // Tool lookup and subprocess failures land here with the raw
        // error chain rather than a curated status line.
        eprintln!("{}", format!("Error: {err:?}").red());
        std::process::exit(1);
    }
}
