use chrono::{DateTime, Utc};
use pdarena_core::{
    MatchResolutionId, SubmissionId, TournamentDataId, TournamentId, TournamentSubmissionId,
    UserId,
};
use serde::{Deserialize, Serialize};

/// Records carrying a server-assigned creation time in epoch milliseconds.
pub trait Timestamped {
    fn creation_time(&self) -> i64;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.creation_time())
    }
}

macro_rules! impl_timestamped {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Timestamped for $record {
                fn creation_time(&self) -> i64 {
                    self.creation_time
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentSubmissionKind {
    Compete,
    Validate,
    Testcase,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: SubmissionId,
    pub creation_time: i64,
    pub creator_user_id: UserId,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub tournament_id: TournamentId,
    pub creation_time: i64,
    pub creator_user_id: UserId,
}

/// One revision of a tournament's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    pub tournament_data_id: TournamentDataId,
    pub creation_time: i64,
    pub creator_user_id: UserId,
    pub tournament: Tournament,
    pub title: String,
    pub description: String,
    pub active: bool,
}

/// Role-tagged link between a submission and a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSubmission {
    pub tournament_submission_id: TournamentSubmissionId,
    pub creation_time: i64,
    pub creator_user_id: UserId,
    pub tournament: Tournament,
    pub submission_id: SubmissionId,
    pub kind: TournamentSubmissionKind,
}

/// Outcome of a single round between two submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResolution {
    pub match_resolution_id: MatchResolutionId,
    pub creation_time: i64,
    pub submission_id: SubmissionId,
    pub opponent_submission_id: SubmissionId,
    pub round: i64,
    /// `None` when the server did not record a move for this round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defected: Option<bool>,
    pub stdout: String,
    pub stderr: String,
}

impl_timestamped!(
    Submission,
    Tournament,
    TournamentData,
    TournamentSubmission,
    MatchResolution,
);
