//! Domain types shared by the pdarena client crates.

pub mod domain;

pub use domain::{
    ApiKey, CredentialError, CredentialStore, FileCredentialStore, MatchResolutionId,
    MemoryCredentialStore, SubmissionId, TournamentDataId, TournamentId, TournamentSubmissionId,
    UserId, persist_api_key, restore_api_key,
};
