//! JSON file helpers with atomic writes

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{IncomeError, IncomeResult};

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json_opt<T, P>(path: P) -> IncomeResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| IncomeError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| IncomeError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;
    Ok(Some(value))
}

/// Write JSON to `path` via a sibling temp file and rename
///
/// Readers see either the old file or the complete new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> IncomeResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            IncomeError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| IncomeError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IncomeError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Option<Sample> = read_json_opt(temp_dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_read_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("sample.json");
        let data = Sample {
            name: "salary".into(),
            value: 7,
        };

        write_json_atomic(&path, &data).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        let loaded: Option<Sample> = read_json_opt(&path).unwrap();
        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let result: IncomeResult<Option<Sample>> = read_json_opt(&path);
        assert!(matches!(result, Err(IncomeError::Json(_))));
    }
}
