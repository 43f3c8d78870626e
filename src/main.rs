use clap::Parser;
use credvault::cli::{repl, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = repl::run(&cli) {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
