use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use serde_json::{ Map, Value };
use crate::error::StoreError;
use crate::utils::Theme;
use super::{ parse_stored, ThemeStore };

/// Native stand-in for `localStorage`: a JSON object of string values kept
/// in a single file. Keys other than ours are left untouched.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        let values = self.load()?;
        Ok(values.get(&self.key).and_then(Value::as_str).map(str::to_string))
    }

    fn store(&self, theme: Theme) -> Result<(), StoreError> {
        let mut values = self.load().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable preferences at {}: {}", self.path.display(), e);
            Map::new()
        });
        values.insert(self.key.clone(), Value::String(theme.as_str().to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

impl ThemeStore for FileStore {
    fn read_theme(&self) -> Option<Theme> {
        match self.read_raw() {
            Ok(raw) => parse_stored(&self.key, raw),
            Err(e) => {
                log::warn!("Failed to read theme from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn write_theme(&self, theme: Theme) {
        if let Err(e) = self.store(theme) {
            log::error!("Failed to persist theme to {}: {}", self.path.display(), e);
        }
    }
}
