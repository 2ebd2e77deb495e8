// crates/csv2tsv-cli/src/main.rs

use clap::Parser;

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "csv2tsv")]
#[command(about = "Convert a CSV file into tab-separated values", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: cmd::convert::ConvertArgs,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    cmd::convert::run(cli.convert)
}
