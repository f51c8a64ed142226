use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM Gateway error: {0}")]
    Provider(String),

    #[error("Dispatch error: {0}")]
    Dispatch(String),
}
