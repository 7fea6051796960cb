use clap::Parser;
use quickdo::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = quickdo::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
