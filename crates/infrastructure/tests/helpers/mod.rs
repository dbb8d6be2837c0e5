#![allow(dead_code)]
mod doh_server_mock;
mod mock_ports;

pub use doh_server_mock::MockDohServer;
pub use mock_ports::*;
