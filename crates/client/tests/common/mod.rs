#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pdarena_client::{ClientError, RawResponse, Result, Transport};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Value,
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(RawResponse),
    Fail,
}

#[derive(Clone)]
pub struct StubTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    calls: Arc<AtomicUsize>,
}

impl StubTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::with_reply(Reply::Respond(RawResponse::new(status, body)))
    }

    pub fn responding_json(status: u16, body: &Value) -> Self {
        Self::responding(status, &body.to_string())
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Fail)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(RecordedRequest {
                url: url.to_string(),
                body,
            });

        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail => Err(ClientError::Other(anyhow::anyhow!("connection refused"))),
        }
    }
}

pub const SERVER: &str = "http://arena.test/api";

pub fn tournament_json() -> Value {
    json!({ "tournamentId": 2, "creationTime": 900, "creatorUserId": 7 })
}

pub fn submission_json() -> Value {
    json!({
        "submissionId": 1,
        "creationTime": 1000,
        "creatorUserId": 7,
        "code": "print(1)",
    })
}

pub fn tournament_data_json() -> Value {
    json!({
        "tournamentDataId": 4,
        "creationTime": 1100,
        "creatorUserId": 7,
        "tournament": tournament_json(),
        "title": "Spring Open",
        "description": "round robin, 200 rounds",
        "active": true,
    })
}

pub fn tournament_submission_json() -> Value {
    json!({
        "tournamentSubmissionId": 5,
        "creationTime": 1200,
        "creatorUserId": 7,
        "tournament": tournament_json(),
        "submissionId": 1,
        "kind": "COMPETE",
    })
}

pub fn match_resolution_json() -> Value {
    json!({
        "matchResolutionId": 8,
        "creationTime": 1300,
        "submissionId": 1,
        "opponentSubmissionId": 3,
        "round": 0,
        "defected": true,
        "stdout": "D\n",
        "stderr": "",
    })
}
