// SenaGen - Mega-Sena Lottery Game Generator
use clap::Parser;
use senagen::cli::args::Args;
use senagen::cli::commands::execute;

fn main() {
    let args = Args::parse();

    if let Err(e) = execute(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
