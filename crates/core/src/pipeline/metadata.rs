use std::fs;
use std::path::Path;

use crate::shared::moment_record::MomentRecord;

/// Persists the ordered record list as a pretty-printed JSON array,
/// creating parent directories as needed.
pub fn write_metadata(
    path: &Path,
    records: &[MomentRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parses a metadata document written by [`write_metadata`].
pub fn read_metadata(path: &Path) -> Result<Vec<MomentRecord>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
