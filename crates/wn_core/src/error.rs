use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_)
                | Error::InvalidLexicon(_)
                | Error::Feed(_)
                | Error::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
