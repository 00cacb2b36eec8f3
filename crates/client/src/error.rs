use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("HTTP 错误: {0}")]
    Http(#[from] reqwest::Error),

    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
