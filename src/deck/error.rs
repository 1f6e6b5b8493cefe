use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("duplicate card id: {0}")]
    DuplicateId(u64),

    #[error("feed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
