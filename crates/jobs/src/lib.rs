pub mod runner;
pub mod store_sweep;

pub use runner::JobRunner;
pub use store_sweep::StoreSweepJob;
