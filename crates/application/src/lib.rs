//! Sidestep Application Layer: ports, services and one use case per engine event.
pub mod ports;
pub mod services;
pub mod use_cases;
