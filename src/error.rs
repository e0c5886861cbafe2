use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewerError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0} (accepted: .pdf, .doc, .docx)")]
    UnsupportedFile(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Log setup error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ReviewerError>;
