use std::path::Path;

use anyhow::Context;
use clap::Args;
use csv2tsv_core::{convert, ConvertOptions};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Name of input file
    #[arg(short = 'i', long = "input", default_value = "input.csv")]
    pub input: String,

    /// Name of output file (created or truncated)
    #[arg(short = 'o', long = "output", default_value = "output.tsv")]
    pub output: String,

    /// Write to a temp file and rename it over the output only on success,
    /// so a failed run never leaves a partial output behind.
    #[arg(long, default_value_t = false)]
    pub atomic: bool,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let opts = ConvertOptions {
        atomic: args.atomic,
    };
    let summary = convert(Path::new(&args.input), Path::new(&args.output), &opts)
        .with_context(|| format!("convert {:?} -> {:?}", args.input, args.output))?;
    debug!(
        rows = summary.rows,
        tabs_scrubbed = summary.tabs_scrubbed,
        "conversion finished"
    );
    Ok(())
}
