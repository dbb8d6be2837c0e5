use sidestep_domain::{DomainError, RecordTable};

/// Durable home of the record table. Loaded at startup and re-read before
/// every save, so records changed by another writer are merged, not lost.
pub trait RecordPersistence: Send + Sync {
    fn load(&self) -> Result<RecordTable, DomainError>;

    fn save(&self, table: &RecordTable) -> Result<(), DomainError>;
}
