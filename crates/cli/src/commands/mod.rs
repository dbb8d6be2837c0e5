mod records;
mod run;
mod urls;

pub use records::{list, resolve, set_enabled, sweep};
pub use run::run;
pub use urls::{rewrite, state, toggle};
