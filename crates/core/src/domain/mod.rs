mod api_key;
mod credential;
mod error;
mod ids;

pub use api_key::ApiKey;
pub use credential::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, persist_api_key,
    restore_api_key,
};
pub use error::CredentialError;
pub use ids::{
    MatchResolutionId, SubmissionId, TournamentDataId, TournamentId, TournamentSubmissionId,
    UserId,
};
