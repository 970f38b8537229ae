use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorKind {
    Configuration,
    Transport,
    Rejected,
    Decode,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid directory base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("directory request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("directory rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed directory response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DirectoryError {
    pub fn kind(&self) -> DirectoryErrorKind {
        match self {
            Self::InvalidBaseUrl(_) => DirectoryErrorKind::Configuration,
            Self::Transport(_) => DirectoryErrorKind::Transport,
            Self::Rejected { .. } => DirectoryErrorKind::Rejected,
            Self::Decode(_) => DirectoryErrorKind::Decode,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
