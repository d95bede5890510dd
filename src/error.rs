use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("unknown menu choice '{0}', pick a number from 0 to 6")]
    InvalidChoice(String),

    #[error("depth limit must be a non-negative integer, got '{0}'")]
    InvalidDepthLimit(String),

    #[error("depth-limited search needs --depth-limit")]
    MissingDepthLimit,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
