//! pdarena 远程 API 客户端。
//!
//! 每个服务端操作对应一个方法。所有方法都返回 [`ApiResult`]：
//! 成功时为解码后的响应体，失败时为 [`AppErrorCode`]，不会向调用方抛出其他错误。

use pdarena_api_types::{
    ApiResult, AppErrorCode, MatchResolution, MatchResolutionViewProps, Submission,
    SubmissionNewProps, SubmissionViewProps, TournamentData, TournamentDataNewProps,
    TournamentDataViewProps, TournamentNewProps, TournamentSubmission,
    TournamentSubmissionNewProps, TournamentSubmissionViewProps,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::endpoint;
use crate::transport::{RawResponse, ReqwestTransport, Transport};

/// 类型化的 API 客户端。
///
/// 客户端本身不持有可变状态，可在多个任务间共享并发调用；
/// 不做重试、超时或缓存，每次调用只发送一次请求。
#[derive(Debug, Clone)]
pub struct ArenaClient<T = ReqwestTransport> {
    transport: T,
}

impl ArenaClient<ReqwestTransport> {
    /// 使用默认 HTTP 传输创建客户端。
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for ArenaClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ArenaClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 上传一份提交代码。
    pub async fn submission_new(
        &self,
        props: &SubmissionNewProps,
        server: Option<&str>,
    ) -> ApiResult<Submission> {
        self.call(endpoint::SUBMISSION_NEW, props, server).await
    }

    /// 创建锦标赛，返回其第一版元数据。
    pub async fn tournament_new(
        &self,
        props: &TournamentNewProps,
        server: Option<&str>,
    ) -> ApiResult<TournamentData> {
        self.call(endpoint::TOURNAMENT_NEW, props, server).await
    }

    /// 为已有锦标赛追加一版元数据。
    pub async fn tournament_data_new(
        &self,
        props: &TournamentDataNewProps,
        server: Option<&str>,
    ) -> ApiResult<TournamentData> {
        self.call(endpoint::TOURNAMENT_DATA_NEW, props, server).await
    }

    /// 以指定角色把提交关联到锦标赛。
    pub async fn tournament_submission_new(
        &self,
        props: &TournamentSubmissionNewProps,
        server: Option<&str>,
    ) -> ApiResult<TournamentSubmission> {
        self.call(endpoint::TOURNAMENT_SUBMISSION_NEW, props, server)
            .await
    }

    pub async fn submission_view(
        &self,
        props: &SubmissionViewProps,
        server: Option<&str>,
    ) -> ApiResult<Vec<Submission>> {
        self.call(endpoint::SUBMISSION_VIEW, props, server).await
    }

    pub async fn tournament_data_view(
        &self,
        props: &TournamentDataViewProps,
        server: Option<&str>,
    ) -> ApiResult<Vec<TournamentData>> {
        self.call(endpoint::TOURNAMENT_DATA_VIEW, props, server).await
    }

    pub async fn tournament_submission_view(
        &self,
        props: &TournamentSubmissionViewProps,
        server: Option<&str>,
    ) -> ApiResult<Vec<TournamentSubmission>> {
        self.call(endpoint::TOURNAMENT_SUBMISSION_VIEW, props, server)
            .await
    }

    pub async fn match_resolution_view(
        &self,
        props: &MatchResolutionViewProps,
        server: Option<&str>,
    ) -> ApiResult<Vec<MatchResolution>> {
        self.call(endpoint::MATCH_RESOLUTION_VIEW, props, server)
            .await
    }

    #[tracing::instrument(level = "debug", skip(self, props))]
    async fn call<P, R>(&self, path: &str, props: &P, server: Option<&str>) -> ApiResult<R>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = endpoint::resolve(server, path);

        let body = match serde_json::to_value(props) {
            Ok(body) => body,
            Err(err) => {
                warn!(url = %url, error = %err, "failed to build request body");
                return Err(AppErrorCode::Network);
            }
        };

        let response = match self.transport.post_json(&url, body).await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %url, error = %err, "request failed before a response was received");
                return Err(AppErrorCode::Network);
            }
        };

        debug!(url = %url, status = response.status, "API call completed");
        decode_response(&response)
    }
}

/// 按状态码解码响应。
///
/// - 2xx：响应体解码为 `R`，失败则为 `DECODE_ERROR`；
/// - 其他：响应体应为错误码字符串，未知字符串或非字符串 JSON 为 `UNKNOWN`，
///   无法解析的响应体为 `DECODE_ERROR`。
pub fn decode_response<R: DeserializeOwned>(response: &RawResponse) -> ApiResult<R> {
    if response.is_success() {
        return serde_json::from_slice(&response.body).map_err(|err| {
            debug!(status = response.status, error = %err, "success body did not decode");
            AppErrorCode::DecodeError
        });
    }

    Err(decode_error_code(&response.body))
}

fn decode_error_code(body: &[u8]) -> AppErrorCode {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::String(code)) => AppErrorCode::from_wire(&code),
        Ok(_) => AppErrorCode::Unknown,
        Err(_) => AppErrorCode::DecodeError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_error_code_is_decoded() {
        let response = RawResponse::new(400, "\"SUBMISSION_TOO_LONG\"");

        let result: ApiResult<Submission> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::SubmissionTooLong));
    }

    #[test]
    fn unrecognized_error_string_is_unknown() {
        let response = RawResponse::new(429, "\"RATE_LIMITED\"");

        let result: ApiResult<Submission> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::Unknown));
    }

    #[test]
    fn non_string_error_body_is_unknown() {
        let response = RawResponse::new(500, r#"{"code":"oops"}"#);

        let result: ApiResult<Vec<Submission>> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::Unknown));
    }

    #[test]
    fn unparsable_error_body_is_decode_error() {
        let response = RawResponse::new(502, "<html>Bad Gateway</html>");

        let result: ApiResult<Submission> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::DecodeError));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let response = RawResponse::new(200, r#"{"submissionId":"one"}"#);

        let result: ApiResult<Submission> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::DecodeError));
    }

    #[test]
    fn network_code_from_server_is_passed_through() {
        let response = RawResponse::new(503, "\"NETWORK\"");

        let result: ApiResult<Submission> = decode_response(&response);

        assert_eq!(result, Err(AppErrorCode::Network));
    }
}
