use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("failed to write config {}: {reason}", path.display())]
    WriteError { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chat error: {0}")]
    Chat(String),

    #[error("{0}")]
    Other(String),
}
