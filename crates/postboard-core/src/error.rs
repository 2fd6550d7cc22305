use thiserror::Error;

pub type PostboardResult<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum PostboardError {
    /// The requested page is outside the valid range for the list.
    #[error("Page {requested} is out of range, only {total_pages} page(s) available")]
    PageOutOfRange {
        requested: usize,
        total_pages: usize,
    },
    #[error("Config error: {msg}")]
    ConfigError { msg: String },
    /// Custom Error type for errors not covered by the above errors.
    #[error("{msg}")]
    CustomError { msg: String },
}

impl PostboardError {
    pub fn custom_error(msg: String) -> Self {
        Self::CustomError { msg }
    }

    pub fn config_error(msg: String) -> Self {
        Self::ConfigError { msg }
    }
}
