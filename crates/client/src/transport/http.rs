//! 基于 reqwest 的传输实现。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{RawResponse, Transport};
use crate::error::Result;

/// 通过 HTTP 发送请求的传输实现。
///
/// 不设置超时，也不做重试。
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用调用方构造的 `reqwest::Client`（例如自定义 TLS 或代理）。
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<RawResponse> {
        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(url = %url, status, bytes = body.len(), "received HTTP response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
