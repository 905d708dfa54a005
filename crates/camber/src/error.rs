use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid pattern token '{0}'")]
    InvalidPattern(String),

    #[error("Signature pattern is empty")]
    EmptyPattern,

    #[error("Pattern/mask length mismatch: {pattern} bytes vs {mask} mask characters")]
    MaskLengthMismatch { pattern: usize, mask: usize },

    #[error("Module image unavailable: {0}")]
    ModuleImage(String),

    #[error("Offset table already installed for this process")]
    AlreadyInstalled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
