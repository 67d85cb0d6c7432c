//! Command implementations.

pub mod config;
pub mod convert;
pub mod inspect;

pub use self::config::execute_config;
pub use self::convert::execute_convert;
pub use self::inspect::execute_inspect;
