use clap::Parser;

use alnview::show;

#[derive(Parser)]
enum Cli {
    /// Render an alignment as a dotted, optionally coloured character grid.
    Show(show::Cli),
}

fn main() -> anyhow::Result<()> {
    match Cli::parse() {
        Cli::Show(cli) => show::cli(cli),
    }
}
