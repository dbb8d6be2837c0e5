pub mod record_persistence;

pub use record_persistence::{JsonFileRecordPersistence, MemoryRecordPersistence};
