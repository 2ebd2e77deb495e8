// crates/csv2tsv-core/src/convert.rs
//
// load -> scrub -> write, once per input/output pair.

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::load::load_csv;
use crate::scrub::scrub_tabs;
use crate::validate::validate_paths;
use crate::write::{write_tsv, write_tsv_atomic};

#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    /// Write through a temp file and rename on success instead of
    /// truncating the destination up front.
    pub atomic: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub tabs_scrubbed: usize,
}

pub fn convert(input: &Path, output: &Path, opts: &ConvertOptions) -> Result<Summary> {
    validate_paths(input, output)?;

    let mut rows = load_csv(input)?;
    info!("loaded {:?}", input);

    let tabs_scrubbed = scrub_tabs(&mut rows);
    if tabs_scrubbed > 0 {
        debug!(tabs = tabs_scrubbed, "replaced tabs inside fields");
    }

    if opts.atomic {
        write_tsv_atomic(output, &rows)?;
    } else {
        write_tsv(output, &rows)?;
    }
    info!("created {:?}", output);

    Ok(Summary {
        rows: rows.len(),
        tabs_scrubbed,
    })
}
