use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rule pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Channel value {value} in {literal} does not fit in 64 bits")]
    ChannelOutOfRange {
        literal: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
