use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server responded with {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid server url: {0}")]
    BadBaseUrl(String),

    #[error("ERROR: {msg}")]
    CustomError { msg: String },
}

impl ClientError {
    pub fn custom_error(msg: String) -> Self {
        Self::CustomError { msg }
    }
}
