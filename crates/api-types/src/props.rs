//! Request bodies, one per operation.
//!
//! View filters are `Option`s. `None` is left out of the body entirely, so
//! an unapplied filter stays distinct from one applied with an empty list.
//! Filters present together are assumed to combine conjunctively.

use pdarena_core::{
    MatchResolutionId, SubmissionId, TournamentDataId, TournamentId, TournamentSubmissionId,
    UserId,
};
use serde::{Deserialize, Serialize};

use crate::TournamentSubmissionKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionNewProps {
    pub code: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentNewProps {
    pub title: String,
    pub description: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDataNewProps {
    pub tournament_id: TournamentId,
    pub title: String,
    pub description: String,
    pub active: bool,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSubmissionNewProps {
    pub tournament_id: TournamentId,
    pub submission_id: SubmissionId,
    pub active: bool,
    pub kind: TournamentSubmissionKind,
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionViewProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Vec<SubmissionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<Vec<UserId>>,
    pub api_key: String,
}

impl SubmissionViewProps {
    /// Unfiltered query.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDataViewProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_data_id: Option<Vec<TournamentDataId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<Vec<UserId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<Vec<TournamentId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Only the latest revision per tournament.
    pub only_recent: bool,
    pub api_key: String,
}

impl TournamentDataViewProps {
    pub fn new(api_key: impl Into<String>, only_recent: bool) -> Self {
        Self {
            only_recent,
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSubmissionViewProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_submission_id: Option<Vec<TournamentSubmissionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<Vec<UserId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<Vec<TournamentId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Vec<SubmissionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TournamentSubmissionKind>,
    /// Only the latest link per (tournament, submission) pair.
    pub only_recent: bool,
    pub api_key: String,
}

impl TournamentSubmissionViewProps {
    pub fn new(api_key: impl Into<String>, only_recent: bool) -> Self {
        Self {
            only_recent,
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResolutionViewProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_creation_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_resolution_id: Option<Vec<MatchResolutionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<Vec<UserId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Vec<SubmissionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_submission_id: Option<Vec<SubmissionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<Vec<i64>>,
    pub api_key: String,
}

impl MatchResolutionViewProps {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_filters_are_omitted() {
        let props = TournamentDataViewProps::new("abc", true);

        let value = serde_json::to_value(&props).expect("encode props");

        assert_eq!(value, json!({ "onlyRecent": true, "apiKey": "abc" }));
    }

    #[test]
    fn empty_filter_is_sent_as_empty_list() {
        let props = SubmissionViewProps {
            submission_id: Some(vec![]),
            ..SubmissionViewProps::new("abc")
        };

        let value = serde_json::to_value(&props).expect("encode props");

        assert_eq!(value, json!({ "submissionId": [], "apiKey": "abc" }));
    }

    #[test]
    fn link_props_use_wire_names() {
        let props = TournamentSubmissionNewProps {
            tournament_id: TournamentId::new(2),
            submission_id: SubmissionId::new(5),
            active: true,
            kind: TournamentSubmissionKind::Compete,
            api_key: "abc".to_string(),
        };

        let value = serde_json::to_value(&props).expect("encode props");

        assert_eq!(
            value,
            json!({
                "tournamentId": 2,
                "submissionId": 5,
                "active": true,
                "kind": "COMPETE",
                "apiKey": "abc",
            })
        );
    }

    #[test]
    fn match_filters_serialize_all_lists() {
        let props = MatchResolutionViewProps {
            submission_id: Some(vec![SubmissionId::new(1)]),
            opponent_submission_id: Some(vec![SubmissionId::new(2)]),
            round: Some(vec![0, 1]),
            min_creation_time: Some(10),
            ..MatchResolutionViewProps::new("abc")
        };

        let value = serde_json::to_value(&props).expect("encode props");

        assert_eq!(value["submissionId"], json!([1]));
        assert_eq!(value["opponentSubmissionId"], json!([2]));
        assert_eq!(value["round"], json!([0, 1]));
        assert_eq!(value["minCreationTime"], json!(10));
        assert!(value.get("maxCreationTime").is_none());
    }
}
