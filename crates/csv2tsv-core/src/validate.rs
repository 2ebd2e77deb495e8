use std::path::Path;

use crate::error::{ConvertError, Result};

/// Both file names must be present before any file is touched.
pub fn validate_paths(input: &Path, output: &Path) -> Result<()> {
    if input.as_os_str().is_empty() {
        return Err(ConvertError::Config(
            "input file name must not be empty".into(),
        ));
    }
    if output.as_os_str().is_empty() {
        return Err(ConvertError::Config(
            "output file name must not be empty".into(),
        ));
    }
    Ok(())
}
