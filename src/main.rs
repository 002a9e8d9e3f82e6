//! rpayroll main entrypoint.

use clap::Parser;
use rpayroll::cli::parser::Cli;
use rpayroll::run;
use rpayroll::ui::output::Output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        Output::new(cli.json).failure(&e);
        std::process::exit(1);
    }
}
