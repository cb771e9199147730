//! Offset table persistence.
//!
//! Tables are stored as JSON so a new target build can be supported by
//! shipping a data file instead of a rebuild.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

use super::OffsetTable;

/// Load an offset table from a JSON file.
pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    let content = fs::read_to_string(&path)?;
    let table: OffsetTable = serde_json::from_str(&content)?;
    if !table.is_valid() {
        return Err(Error::InvalidOffsets(format!(
            "incomplete table in {}",
            path.as_ref().display()
        )));
    }
    Ok(table)
}

/// Save an offset table as pretty-printed JSON.
pub fn save_offsets<P: AsRef<Path>>(path: P, table: &OffsetTable) -> Result<()> {
    let content = serde_json::to_string_pretty(table)?;
    fs::write(&path, content)?;
    info!("Saved offsets to {}", path.as_ref().display());
    Ok(())
}
