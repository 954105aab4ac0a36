//! Command implementations.

mod info;
mod process;
mod validate;

pub use info::run_info;
pub use process::run_process;
pub use validate::run_validate;
