// Item Fetcher
//
// Catalog queries used by the tree builder and the resolve path

use jellyfin_client::{Item, ItemField, ItemType, ItemsQuery};
use tracing::debug;

use crate::catalog::CatalogClient;
use crate::error::Result;

/// Thin query layer over a [`CatalogClient`]
#[derive(Clone, Copy)]
pub struct ItemFetcher<'a> {
    client: &'a dyn CatalogClient,
}

impl<'a> ItemFetcher<'a> {
    #[must_use]
    pub const fn new(client: &'a dyn CatalogClient) -> Self {
        Self { client }
    }

    /// Top-level libraries with a supported collection type
    ///
    /// Libraries without a collection type or with an unsupported one are
    /// dropped silently.
    pub async fn list_libraries(&self) -> Result<Vec<Item>> {
        let response = self.client.get_media_folders().await?;
        let libraries: Vec<Item> = response
            .items
            .into_iter()
            .filter(|library| {
                library
                    .collection_type
                    .as_ref()
                    .is_some_and(|collection_type| collection_type.is_supported())
            })
            .collect();

        debug!(count = libraries.len(), "Fetched supported libraries");
        Ok(libraries)
    }

    /// All descendants of `parent_id` of type `item_type`
    ///
    /// Media sources are requested for playable types only.
    pub async fn list_children(&self, parent_id: &str, item_type: ItemType) -> Result<Vec<Item>> {
        let playable = item_type.is_playable();
        let mut query = ItemsQuery::descendants_of(parent_id).with_item_type(item_type.clone());
        if playable {
            query = query.with_field(ItemField::MediaSources);
        }

        let response = self.client.query_items(&query).await?;
        debug!(
            parent_id,
            item_type = %item_type,
            count = response.items.len(),
            "Fetched children"
        );
        Ok(response.items)
    }

    /// Single item by id
    pub async fn get_item(&self, item_id: &str) -> Result<Item> {
        Ok(self.client.get_item(item_id).await?)
    }
}
