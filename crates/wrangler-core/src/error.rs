use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine options: {reason}")]
    InvalidOptions { reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
