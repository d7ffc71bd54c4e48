//! JSON persistence of the four-field save record.

use std::fs;
use std::path::Path;

use thiserror::Error;

use bulwark_core::state::SaveRecord;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse save file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Write `record` as pretty JSON, creating parent directories as needed.
pub fn save_record(path: &Path, record: &SaveRecord) -> Result<(), PersistenceError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| PersistenceError::io(dir, e))?;
    }
    let json = serde_json::to_string_pretty(record).map_err(|e| PersistenceError::json(path, e))?;
    fs::write(path, json).map_err(|e| PersistenceError::io(path, e))
}

pub fn load_record(path: &Path) -> Result<SaveRecord, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| PersistenceError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaveRecord {
        SaveRecord {
            gold: 420,
            wave: 6,
            lives: 11,
            score: 2590,
        }
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir().join("bulwark_test_save_load");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("save.json");

        save_record(&path, &record()).unwrap();
        assert_eq!(load_record(&path).unwrap(), record());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_file_has_exactly_four_fields() {
        let dir = std::env::temp_dir().join("bulwark_test_save_fields");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("save.json");

        save_record(&path, &record()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, ["gold", "lives", "score", "wave"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("bulwark_test_missing").join("none.json");
        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[test]
    fn load_garbage_is_json_error() {
        let dir = std::env::temp_dir().join("bulwark_test_garbage");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("save.json");
        fs::write(&path, "{\"gold\": \"lots\"}").unwrap();

        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Json { .. }));
        assert!(err.to_string().contains("failed to parse save file"));

        let _ = fs::remove_dir_all(&dir);
    }
}
