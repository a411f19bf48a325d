mod cli;
mod extract_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = extract_cmd::run(&cli.file, cli.provider.as_deref(), &cli.format);

    if let Err(code) = result {
        std::process::exit(code);
    }
}
