#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{color::ColorRule, migrator::Migrator};
pub use domain::{model::MigrationStats, ports::LineRule};
pub use utils::error::{MigrateError, Result};
