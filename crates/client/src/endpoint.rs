//! API 地址解析。
//!
//! 每个操作对应一个固定路径后缀，拼接在基础地址之后。
//! 调用方未指定基础地址时，使用进程级默认地址。

use std::env;
use std::sync::OnceLock;

use crate::error::{ClientError, Result};

/// 未配置任何地址时使用的基础地址。
pub const FALLBACK_API_URL: &str = "http://localhost:8080/api";

/// 覆盖默认基础地址的环境变量。
pub const API_URL_ENV: &str = "PDARENA_API_URL";

pub const SUBMISSION_NEW: &str = "/pdarena/submission/new";
pub const TOURNAMENT_NEW: &str = "/pdarena/tournament/new";
pub const TOURNAMENT_DATA_NEW: &str = "/pdarena/tournament_data/new";
pub const TOURNAMENT_SUBMISSION_NEW: &str = "/pdarena/tournament_submission/new";
pub const SUBMISSION_VIEW: &str = "/pdarena/submission/view";
pub const TOURNAMENT_DATA_VIEW: &str = "/pdarena/tournament_data/view";
pub const TOURNAMENT_SUBMISSION_VIEW: &str = "/pdarena/tournament_submission/view";
pub const MATCH_RESOLUTION_VIEW: &str = "/pdarena/match_resolution/view";

static DEFAULT_API_URL: OnceLock<String> = OnceLock::new();

/// 设置进程级默认基础地址。
///
/// 只能设置一次，重复设置返回 [`ClientError::Config`]。
pub fn set_default_api_url(url: impl Into<String>) -> Result<()> {
    DEFAULT_API_URL.set(url.into()).map_err(|rejected| {
        ClientError::Config(format!(
            "default API url already set, rejected: {rejected}"
        ))
    })
}

/// 返回进程级默认基础地址。
///
/// 优先级：[`set_default_api_url`] 设置的值、`PDARENA_API_URL` 环境变量、
/// [`FALLBACK_API_URL`]。
pub fn default_api_url() -> String {
    let from_env = env::var(API_URL_ENV).ok();
    pick_api_url(
        DEFAULT_API_URL.get().map(String::as_str),
        from_env.as_deref(),
    )
}

/// 空白的环境变量值视为未设置。
fn pick_api_url(configured: Option<&str>, from_env: Option<&str>) -> String {
    configured
        .or_else(|| from_env.filter(|value| !value.trim().is_empty()))
        .unwrap_or(FALLBACK_API_URL)
        .to_string()
}

/// 拼接完整请求地址，不对基础地址做任何规整。
pub fn resolve(server: Option<&str>, path: &str) -> String {
    match server {
        Some(server) => format!("{server}{path}"),
        None => format!("{}{path}", default_api_url()),
    }
}
