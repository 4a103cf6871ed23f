use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}\nusage: golrs-sparse [--show] [--generations N] [--runs N]")]
    UnknownArgument(String),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("{flag} requires a positive integer, got {value:?}")]
    InvalidNumber { flag: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("board of {width}x{height} cells is too large to draw")]
    BoardTooLarge { width: u64, height: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
