use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "qd", about = concat!("[@] quickdo v", env!("CARGO_PKG_VERSION"), " - capture todos, tag them inline"), version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Start with an empty list instead of the sample data
    #[arg(long)]
    pub empty: bool,
}
