pub mod doh;
pub mod redirect;
pub mod repositories;
pub mod store;
pub mod system;
