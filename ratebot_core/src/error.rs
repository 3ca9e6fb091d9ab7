use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No currency {code} on page {page}")]
    NotFound { code: String, page: usize },

    #[error("Unsupported payload: {0}")]
    Unsupported(String),
}
