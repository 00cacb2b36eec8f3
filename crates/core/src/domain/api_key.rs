use serde::{Deserialize, Serialize};

use super::UserId;

/// Bearer credential issued by the auth service.
///
/// `creation_time` and `duration` are milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub api_key_id: i64,
    pub creation_time: i64,
    pub creator_user_id: UserId,
    pub key: String,
    pub duration: i64,
}

impl ApiKey {
    pub fn expires_at(&self) -> i64 {
        self.creation_time.saturating_add(self.duration)
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ApiKey {
        ApiKey {
            api_key_id: 3,
            creation_time: 1_000,
            creator_user_id: UserId::new(7),
            key: "abc".to_string(),
            duration: 500,
        }
    }

    #[test]
    fn expiry_is_creation_plus_duration() {
        let key = sample();

        assert_eq!(key.expires_at(), 1_500);
        assert!(!key.is_expired_at(1_499));
        assert!(key.is_expired_at(1_500));
    }

    #[test]
    fn api_key_uses_camel_case_fields() {
        let value = serde_json::to_value(sample()).expect("serialize api key");

        assert_eq!(value["apiKeyId"], 3);
        assert_eq!(value["creatorUserId"], 7);
        assert_eq!(value["key"], "abc");
    }
}
