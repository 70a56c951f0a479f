pub mod color;
pub mod migrator;

pub use crate::domain::model::MigrationStats;
pub use crate::domain::ports::LineRule;
pub use crate::utils::error::Result;
