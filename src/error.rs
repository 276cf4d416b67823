#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}
