pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("repository must be in the format 'owner/repo', got '{0}'")]
    InvalidRepository(String),

    #[error("the value for stuck-prs cannot be negative, received {0}")]
    NegativeThreshold(i64),

    #[error("no commands given. Expected one or both: --week-stats --stuck-prs [days]")]
    NoModeSelected,

    #[error("token contains characters that cannot be sent in a header")]
    InvalidToken,

    #[error("GitHub API request failed with status code {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse pull request listing: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    /// Configuration errors are caught before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidRepository(_)
                | Error::NegativeThreshold(_)
                | Error::NoModeSelected
                | Error::InvalidToken
        )
    }
}
