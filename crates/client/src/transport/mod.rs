//! 传输抽象层。
//!
//! 该模块定义了统一的 `Transport` 接口，负责把 JSON 请求体发送到目标地址，
//! 并原样返回状态码与响应体。状态码的解释由客户端负责。

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

mod http;

pub use http::ReqwestTransport;

/// 未经解码的 HTTP 响应。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 状态码位于 200..=299 时视为成功。
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// 传输接口。
///
/// 实现只在无法获得响应时返回错误（连接失败、请求构造失败、读取响应体失败等）；
/// 任何状态码的响应都应作为 `Ok` 返回。
#[async_trait]
pub trait Transport: Send + Sync {
    /// 以 POST 方式发送 JSON 请求体。
    async fn post_json(&self, url: &str, body: Value) -> Result<RawResponse>;
}

#[cfg(test)]
mod tests {
    use super::RawResponse;

    #[test]
    fn success_range_is_inclusive() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(299, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
        assert!(!RawResponse::new(400, "").is_success());
    }
}
