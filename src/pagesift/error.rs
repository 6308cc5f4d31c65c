use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

pub type Result<T> = std::result::Result<T, Error>;
