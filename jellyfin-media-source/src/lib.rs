// Jellyfin Media Source
//
// Exposes a Jellyfin server's catalog as a navigable media tree and resolves
// catalog entries into playable stream URLs.
//
// Layers:
//
//   catalog  - CatalogClient trait, implemented by jellyfin_client::JellyfinClient
//   fetcher  - library, children and single item queries
//   mime     - MIME type inference from media source paths
//   builder  - per item type tree construction
//   stream   - stream URL selection by media type
//   source   - JellyfinSource, the browse/resolve entry points
//
// All requests are read-only and nothing is cached between them.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod mime;
pub mod models;
pub mod source;
pub mod stream;

pub use builder::{TreeBuilder, MAX_IMAGE_WIDTH};
pub use catalog::CatalogClient;
pub use config::Config;
pub use error::{MediaSourceError, Result};
pub use fetcher::ItemFetcher;
pub use mime::media_mime_type;
pub use models::{BrowseMediaSource, MediaClass, PlayMedia, DOMAIN};
pub use source::JellyfinSource;
pub use stream::stream_url;
