//! Sidestep Domain Layer
pub mod config;
pub mod doh_answer;
pub mod domain_record;
pub mod errors;
pub mod host;
pub mod interception;
pub mod redirect_event;
pub mod toggle_state;

pub use config::{CliOverrides, Config};
pub use doh_answer::DohAnswer;
pub use domain_record::{DomainRecord, RecordTable};
pub use errors::DomainError;
pub use host::{downgrade_scheme, extract_host, is_ip_literal, is_secure, substitute_host};
pub use interception::{ChannelId, Directive, Header, OutboundRequest, ResourceKind};
pub use redirect_event::RedirectEvent;
pub use toggle_state::ToggleState;
