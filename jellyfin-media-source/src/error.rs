// Media Source Error Types

use jellyfin_client::JellyfinError;

/// Errors surfaced by browse and resolve
#[derive(Debug, thiserror::Error)]
pub enum MediaSourceError {
    /// The media tree cannot be built for the request
    #[error("Browse error: {0}")]
    Browse(String),

    /// The request cannot be turned into a playable URL
    #[error("Unresolvable: {0}")]
    Unresolvable(String),

    /// Failure raised by the Jellyfin client, passed through untranslated
    #[error(transparent)]
    Client(#[from] JellyfinError),
}

pub type Result<T> = std::result::Result<T, MediaSourceError>;
