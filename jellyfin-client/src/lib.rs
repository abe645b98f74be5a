// Jellyfin Client
//
// Pure HTTP client for the Jellyfin REST API, independent of any browsing
// logic. Covers the catalog queries and URL builders that a media source
// needs: user views, item queries, single item lookup, stream URLs and
// artwork URLs.
//
// Authentication is not performed here: the client is constructed from an
// already issued access token and user id.

pub mod client;
pub mod error;
pub mod types;

pub use client::JellyfinClient;
pub use error::JellyfinError;
pub use types::*;
