mod common;

use common::{StubTransport, submission_json};
use pdarena_api_types::SubmissionNewProps;
use pdarena_client::{ArenaClient, ClientError, default_api_url, set_default_api_url};

#[tokio::test]
async fn test_calls_without_server_use_process_default() {
    set_default_api_url("http://default.test/api").expect("first set should succeed");
    assert_eq!(default_api_url(), "http://default.test/api");

    let err = set_default_api_url("http://other.test/api").expect_err("second set should fail");
    assert!(matches!(err, ClientError::Config(_)));
    assert_eq!(default_api_url(), "http://default.test/api");

    let transport = StubTransport::responding_json(200, &submission_json());
    let client = ArenaClient::with_transport(transport.clone());
    let props = SubmissionNewProps {
        code: "print(1)".to_string(),
        api_key: "abc".to_string(),
    };

    client
        .submission_new(&props, None)
        .await
        .expect("default server call should succeed");
    client
        .submission_new(&props, Some("http://override.test"))
        .await
        .expect("override call should succeed");

    let urls: Vec<String> = transport
        .requests()
        .into_iter()
        .map(|request| request.url)
        .collect();
    assert_eq!(
        urls,
        vec![
            "http://default.test/api/pdarena/submission/new",
            "http://override.test/pdarena/submission/new",
        ]
    );
}
