pub mod json_transport;

pub use json_transport::{parse_doh_body, DohJsonTransport};
