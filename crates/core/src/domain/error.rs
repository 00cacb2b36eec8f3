use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("credential encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
