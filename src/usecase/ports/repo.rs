#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Message(String),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RepoError {}

/// Small key/value store for client preferences that survive restarts.
pub trait PreferenceRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn load_preference(&self, key: &str) -> Result<Option<String>, RepoError>;
    fn upsert_preference(&self, key: &str, value: &str) -> Result<(), RepoError>;
}
