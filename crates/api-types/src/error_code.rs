use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of failures an API call can resolve to.
///
/// `Network` is produced by the client itself. `Unknown` stands in for any
/// code the server sends that this list does not know yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppErrorCode {
    NoCapability,
    SubmissionNonexistent,
    TournamentNonexistent,
    SubmissionTooLong,
    TournamentSubmissionNotValidated,
    TournamentSubmissionTestcaseFails,
    DecodeError,
    InternalServerError,
    MethodNotAllowed,
    Unauthorized,
    BadRequest,
    NotFound,
    Network,
    Unknown,
}

impl AppErrorCode {
    pub const ALL: [AppErrorCode; 14] = [
        Self::NoCapability,
        Self::SubmissionNonexistent,
        Self::TournamentNonexistent,
        Self::SubmissionTooLong,
        Self::TournamentSubmissionNotValidated,
        Self::TournamentSubmissionTestcaseFails,
        Self::DecodeError,
        Self::InternalServerError,
        Self::MethodNotAllowed,
        Self::Unauthorized,
        Self::BadRequest,
        Self::NotFound,
        Self::Network,
        Self::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoCapability => "NO_CAPABILITY",
            Self::SubmissionNonexistent => "SUBMISSION_NONEXISTENT",
            Self::TournamentNonexistent => "TOURNAMENT_NONEXISTENT",
            Self::SubmissionTooLong => "SUBMISSION_TOO_LONG",
            Self::TournamentSubmissionNotValidated => "TOURNAMENT_SUBMISSION_NOT_VALIDATED",
            Self::TournamentSubmissionTestcaseFails => "TOURNAMENT_SUBMISSION_TESTCASE_FAILS",
            Self::DecodeError => "DECODE_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Network => "NETWORK",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Codes that never come from the server.
    pub const fn is_client_synthesized(self) -> bool {
        matches!(self, Self::Network)
    }

    /// Lenient parse: unrecognized codes map to `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for AppErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for AppErrorCode {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedErrorCode(pub String);

impl fmt::Display for UnrecognizedErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized error code: {}", self.0)
    }
}

impl std::error::Error for UnrecognizedErrorCode {}

impl FromStr for AppErrorCode {
    type Err = UnrecognizedErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnrecognizedErrorCode(s.to_string()))
    }
}

impl Serialize for AppErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AppErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}
