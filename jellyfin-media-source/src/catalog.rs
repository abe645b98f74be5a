// Catalog Client Trait
//
// Seam between the media source and the Jellyfin server. The HTTP client
// implements it directly; tests substitute an in-memory catalog.

use async_trait::async_trait;
use jellyfin_client::{ImageKind, Item, ItemsQuery, ItemsResponse, JellyfinClient, JellyfinError};

/// Remote catalog operations the media source depends on
///
/// The async methods perform network requests and may take as long as the
/// underlying transport allows; URL builders are pure.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Top-level media folders visible to the user
    async fn get_media_folders(&self) -> Result<ItemsResponse, JellyfinError>;

    /// Items matching `query`
    async fn query_items(&self, query: &ItemsQuery) -> Result<ItemsResponse, JellyfinError>;

    /// Single item by id, failing if the id is unknown
    async fn get_item(&self, item_id: &str) -> Result<Item, JellyfinError>;

    fn audio_stream_url(&self, item_id: &str) -> String;

    fn video_stream_url(&self, item_id: &str) -> String;

    fn artwork_url(&self, item_id: &str, kind: ImageKind, max_width: u32) -> String;

    /// Server root URL
    fn base_url(&self) -> &str;
}

#[async_trait]
impl CatalogClient for JellyfinClient {
    async fn get_media_folders(&self) -> Result<ItemsResponse, JellyfinError> {
        Self::get_media_folders(self).await
    }

    async fn query_items(&self, query: &ItemsQuery) -> Result<ItemsResponse, JellyfinError> {
        Self::query_items(self, query).await
    }

    async fn get_item(&self, item_id: &str) -> Result<Item, JellyfinError> {
        Self::get_item(self, item_id).await
    }

    fn audio_stream_url(&self, item_id: &str) -> String {
        Self::audio_stream_url(self, item_id)
    }

    fn video_stream_url(&self, item_id: &str) -> String {
        Self::video_stream_url(self, item_id)
    }

    fn artwork_url(&self, item_id: &str, kind: ImageKind, max_width: u32) -> String {
        Self::artwork_url(self, item_id, kind, max_width)
    }

    fn base_url(&self) -> &str {
        self.host()
    }
}
