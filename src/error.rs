use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkylineError>;

#[derive(Error, Debug)]
pub enum SkylineError {
    #[error("Git error: {0}")]
    VersionControl(String),
    #[error("Malformed commit date: {line:?} (expected YYYY-MM-DD)")]
    MalformedDate { line: String },
    #[error("Invalid year: {0} (expected a 4-digit calendar year)")]
    InvalidYear(String),
    #[error("No contributions found for {year}")]
    NoContributions { year: i32 },
    #[error("Renderer not found: {binary}")]
    RendererNotFound { binary: String },
    #[error("Renderer exited with {status}: {stderr}")]
    RenderFailed { status: String, stderr: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
