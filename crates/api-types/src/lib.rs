//! Shared request/response types for the pdarena API.

mod error_code;
mod props;
mod records;

pub use error_code::{AppErrorCode, UnrecognizedErrorCode};
pub use props::{
    MatchResolutionViewProps, SubmissionNewProps, SubmissionViewProps, TournamentDataNewProps,
    TournamentDataViewProps, TournamentNewProps, TournamentSubmissionNewProps,
    TournamentSubmissionViewProps,
};
pub use records::{
    MatchResolution, Submission, Timestamped, Tournament, TournamentData, TournamentSubmission,
    TournamentSubmissionKind,
};

/// Outcome of one API call.
pub type ApiResult<T> = Result<T, AppErrorCode>;
