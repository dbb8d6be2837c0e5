use chrono::{DateTime, Utc};

/// Wall-clock source. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
