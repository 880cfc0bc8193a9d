use std::fs;
use std::path::Path;

use crate::tagreport::tools::error::Result;
use crate::tagreport::tools::model::Record;

/// Reads a batch of records from a JSON document on disk.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
