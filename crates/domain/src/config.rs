pub mod errors;
pub mod logging;
pub mod resolver;
pub mod rewrite;
pub mod root;
pub mod store;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use rewrite::RewriteConfig;
pub use root::{CliOverrides, Config};
pub use store::StoreConfig;
