pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;

pub use client::{ArenaClient, decode_response};
pub use config::{ClientConfig, default_config_path};
pub use endpoint::{default_api_url, set_default_api_url};
pub use error::{ClientError, Result};
pub use transport::{RawResponse, ReqwestTransport, Transport};

pub use pdarena_api_types::{ApiResult, AppErrorCode};
