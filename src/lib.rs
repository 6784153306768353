pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::report::ReportBuilder;
pub use utils::error::{ReportError, Result};
