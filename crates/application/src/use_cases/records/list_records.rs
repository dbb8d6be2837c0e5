use crate::ports::ResolutionStore;
use sidestep_domain::RecordTable;
use std::sync::Arc;

pub struct ListRecordsUseCase {
    store: Arc<dyn ResolutionStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn ResolutionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> RecordTable {
        self.store.snapshot()
    }
}
