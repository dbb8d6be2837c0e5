mod clock;
mod doh_transport;
mod record_persistence;
mod redirect_tracker;
mod resolution_store;
mod store_maintenance_port;

pub use clock::Clock;
pub use doh_transport::DohTransport;
pub use record_persistence::RecordPersistence;
pub use redirect_tracker::RedirectTracker;
pub use resolution_store::{ResolutionStore, SweepOutcome};
pub use store_maintenance_port::{StoreMaintenancePort, SweepCycleOutcome};
