mod list_records;
mod set_domain_enabled;

pub use list_records::ListRecordsUseCase;
pub use set_domain_enabled::SetDomainEnabledUseCase;
