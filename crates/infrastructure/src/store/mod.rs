pub mod domain_store;
pub mod maintenance;

pub use domain_store::DomainStore;
pub use maintenance::StoreMaintenance;
