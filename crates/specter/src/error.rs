use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window not found: {0}")]
    WindowNotFound(String),

    #[error("Failed to open process {pid}: {message}")]
    ProcessOpenFailed { pid: u32, message: String },

    #[error("Failed to read process memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Invalid offset table: {0}")]
    InvalidOffsets(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error is a recoverable memory read failure
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::MemoryReadFailed { .. })
    }
}
