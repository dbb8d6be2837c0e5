use sidestep_application::ports::RecordPersistence;
use sidestep_domain::{DomainError, RecordTable};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Record table stored as a single pretty-printed JSON object.
pub struct JsonFileRecordPersistence {
    path: PathBuf,
}

impl JsonFileRecordPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn unavailable(&self, action: &str, err: impl std::fmt::Display) -> DomainError {
        DomainError::PersistenceUnavailable(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

impl RecordPersistence for JsonFileRecordPersistence {
    fn load(&self) -> Result<RecordTable, DomainError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No record file yet, starting empty");
                return Ok(RecordTable::new());
            }
            Err(e) => return Err(self.unavailable("read", e)),
        };

        if contents.trim().is_empty() {
            return Ok(RecordTable::new());
        }

        serde_json::from_str(&contents).map_err(|e| self.unavailable("parse", e))
    }

    fn save(&self, table: &RecordTable) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(table).map_err(|e| self.unavailable("encode", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.unavailable("create directory for", e))?;
        }

        // readers never see a half-written file
        let temp = self.temp_path();
        std::fs::write(&temp, json).map_err(|e| self.unavailable("write", e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| self.unavailable("replace", e))?;

        debug!(path = %self.path.display(), records = table.len(), "Record table saved");
        Ok(())
    }
}

/// Keeps the table in memory only. Used for ephemeral runs and tests.
#[derive(Default)]
pub struct MemoryRecordPersistence {
    table: Mutex<RecordTable>,
    saves: AtomicUsize,
}

impl MemoryRecordPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: RecordTable) -> Self {
        Self {
            table: Mutex::new(table),
            saves: AtomicUsize::new(0),
        }
    }

    /// Last table handed to `save` (or the initial one).
    pub fn stored(&self) -> RecordTable {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl RecordPersistence for MemoryRecordPersistence {
    fn load(&self) -> Result<RecordTable, DomainError> {
        Ok(self.stored())
    }

    fn save(&self, table: &RecordTable) -> Result<(), DomainError> {
        *self.table.lock().unwrap_or_else(PoisonError::into_inner) = table.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
