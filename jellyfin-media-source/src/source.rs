// Jellyfin Media Source
//
// Entry points for hosts: browse an identifier into a node tree, or
// resolve it into a playable URL

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::builder::TreeBuilder;
use crate::catalog::CatalogClient;
use crate::error::{MediaSourceError, Result};
use crate::fetcher::ItemFetcher;
use crate::mime::media_mime_type;
use crate::models::{BrowseMediaSource, PlayMedia};
use crate::stream::stream_url;

const NOT_INITIALIZED: &str = "Jellyfin not initialized";

/// Media source backed by a Jellyfin server
///
/// The client can be attached and detached at any time; requests issued
/// while none is attached fail immediately. Each request works on its own
/// snapshot of the client and builds its result from freshly fetched items.
pub struct JellyfinSource {
    name: String,
    client: RwLock<Option<Arc<dyn CatalogClient>>>,
}

impl JellyfinSource {
    /// Create a source without a client
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client: RwLock::new(None),
        }
    }

    /// Create a source with an attached client
    pub fn with_client(name: impl Into<String>, client: Arc<dyn CatalogClient>) -> Self {
        let source = Self::new(name);
        source.attach(client);
        source
    }

    /// Attach a client, replacing any previous one
    pub fn attach(&self, client: Arc<dyn CatalogClient>) {
        *self.client.write() = Some(client);
    }

    /// Detach the current client
    pub fn detach(&self) -> Option<Arc<dyn CatalogClient>> {
        self.client.write().take()
    }

    /// Currently attached client
    #[must_use]
    pub fn client(&self) -> Option<Arc<dyn CatalogClient>> {
        self.client.read().clone()
    }

    /// Title of the root node
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Server URL, if a client is attached
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.client().map(|client| client.base_url().to_string())
    }

    /// Resolve an item into a stream URL and its MIME type
    pub async fn resolve_media(&self, identifier: &str) -> Result<PlayMedia> {
        let client = self
            .client()
            .ok_or_else(|| MediaSourceError::Unresolvable(NOT_INITIALIZED.to_string()))?;

        let item = ItemFetcher::new(client.as_ref()).get_item(identifier).await?;
        let url = stream_url(client.as_ref(), &item)?;

        // Browsing never lists items without a MIME type, but the
        // identifier may come from elsewhere (e.g. a stale bookmark).
        let Some(mime_type) = media_mime_type(&item) else {
            warn!(item_id = identifier, "Resolve requested for item without a mime type");
            return Err(MediaSourceError::Unresolvable(format!(
                "Unable to determine mime type for item {identifier}"
            )));
        };

        debug!(item_id = identifier, mime_type = %mime_type, "Resolved media");
        Ok(PlayMedia { url, mime_type })
    }

    /// Browse an item, or the library root when `identifier` is empty
    pub async fn browse_media(&self, identifier: Option<&str>) -> Result<BrowseMediaSource> {
        let client = self
            .client()
            .ok_or_else(|| MediaSourceError::Browse(NOT_INITIALIZED.to_string()))?;
        let builder = TreeBuilder::new(client.as_ref());

        let identifier = match identifier {
            Some(identifier) if !identifier.is_empty() => identifier,
            _ => {
                debug!("Browsing library root");
                return builder.build_root(&self.name).await;
            }
        };

        debug!(item_id = identifier, "Browsing item");
        let item = ItemFetcher::new(client.as_ref()).get_item(identifier).await?;
        builder.build_item(&item).await
    }
}
