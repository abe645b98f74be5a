// Media Tree Builder
//
// Turns catalog items into browsable nodes. Every expandable item type maps
// to one child level below it:
//
//   music library  -> artists   (albums when the library has no artists)
//   movie library  -> movies
//   tv library     -> series
//   artist         -> albums
//   album          -> tracks
//   series         -> seasons
//   season         -> episodes
//
// Only the browsed node gets children; its children are built without
// their own. Playable children without a derivable MIME type are dropped.

use std::cmp::Ordering;

use jellyfin_client::{CollectionType, ImageKind, Item, ItemType};

use crate::catalog::CatalogClient;
use crate::error::{MediaSourceError, Result};
use crate::fetcher::ItemFetcher;
use crate::mime::media_mime_type;
use crate::models::{BrowseMediaSource, MediaClass};

/// Width artwork is scaled down to
pub const MAX_IMAGE_WIDTH: u32 = 500;

/// Field children are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    IndexNumber,
}

impl SortField {
    /// Stable sort: items having the field first, ascending by its value,
    /// then items missing it in their original order
    pub fn sort(self, items: &mut [Item]) {
        match self {
            Self::Name => {
                items.sort_by(|a, b| missing_last(a.name.as_deref(), b.name.as_deref()));
            }
            Self::IndexNumber => {
                items.sort_by(|a, b| missing_last(a.index_number, b.index_number));
            }
        }
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    (a.is_none(), a).cmp(&(b.is_none(), b))
}

/// Shape of the children one level below a parent
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChildLevel {
    item_type: ItemType,
    media_class: MediaClass,
    sort: SortField,
}

const ARTISTS: ChildLevel = ChildLevel {
    item_type: ItemType::Artist,
    media_class: MediaClass::Artist,
    sort: SortField::Name,
};

const ALBUMS: ChildLevel = ChildLevel {
    item_type: ItemType::Album,
    media_class: MediaClass::Album,
    sort: SortField::Name,
};

const TRACKS: ChildLevel = ChildLevel {
    item_type: ItemType::Audio,
    media_class: MediaClass::Track,
    sort: SortField::IndexNumber,
};

const MOVIES: ChildLevel = ChildLevel {
    item_type: ItemType::Movie,
    media_class: MediaClass::Movie,
    sort: SortField::Name,
};

const SERIES: ChildLevel = ChildLevel {
    item_type: ItemType::Series,
    media_class: MediaClass::TvShow,
    sort: SortField::Name,
};

const SEASONS: ChildLevel = ChildLevel {
    item_type: ItemType::Season,
    media_class: MediaClass::Season,
    sort: SortField::IndexNumber,
};

const EPISODES: ChildLevel = ChildLevel {
    item_type: ItemType::Episode,
    media_class: MediaClass::Episode,
    sort: SortField::IndexNumber,
};

/// Builds browsable nodes from catalog items
pub struct TreeBuilder<'a> {
    client: &'a dyn CatalogClient,
    fetcher: ItemFetcher<'a>,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub const fn new(client: &'a dyn CatalogClient) -> Self {
        Self {
            client,
            fetcher: ItemFetcher::new(client),
        }
    }

    /// Synthetic root listing every supported library
    pub async fn build_root(&self, title: &str) -> Result<BrowseMediaSource> {
        let libraries = self.fetcher.list_libraries().await?;
        let children = libraries.iter().map(library_node).collect();

        Ok(BrowseMediaSource::container(None, MediaClass::Directory, title, None)
            .with_children(MediaClass::Directory, children))
    }

    /// Node for `item` together with its immediate children
    ///
    /// Fails for item types that cannot be browsed into, including the
    /// playable leaf types.
    pub async fn build_item(&self, item: &Item) -> Result<BrowseMediaSource> {
        let (media_class, level) = match item.item_type {
            ItemType::Library => return self.build_library(item).await,
            ItemType::Artist => (MediaClass::Artist, &ALBUMS),
            ItemType::Album => (MediaClass::Album, &TRACKS),
            ItemType::Series => (MediaClass::TvShow, &SEASONS),
            ItemType::Season => (MediaClass::Season, &EPISODES),
            ItemType::Audio | ItemType::Movie | ItemType::Episode | ItemType::Other(_) => {
                return Err(MediaSourceError::Browse(format!(
                    "Unsupported item type {}",
                    item.item_type
                )));
            }
        };

        let node = self.container_node(item, media_class);
        self.expand(node, &item.id, level).await
    }

    async fn build_library(&self, library: &Item) -> Result<BrowseMediaSource> {
        let node = library_node(library);

        match library.collection_type {
            Some(CollectionType::Music) => {
                let artists = self.build_children(&library.id, &ARTISTS).await?;
                if artists.is_empty() {
                    let albums = self.build_children(&library.id, &ALBUMS).await?;
                    return Ok(node.with_children(ALBUMS.media_class, albums));
                }
                Ok(node.with_children(ARTISTS.media_class, artists))
            }
            Some(CollectionType::Movies) => self.expand(node, &library.id, &MOVIES).await,
            _ => self.expand(node, &library.id, &SERIES).await,
        }
    }

    async fn expand(
        &self,
        node: BrowseMediaSource,
        parent_id: &str,
        level: &ChildLevel,
    ) -> Result<BrowseMediaSource> {
        let children = self.build_children(parent_id, level).await?;
        Ok(node.with_children(level.media_class, children))
    }

    /// Fetch, sort and build one level of children
    async fn build_children(
        &self,
        parent_id: &str,
        level: &ChildLevel,
    ) -> Result<Vec<BrowseMediaSource>> {
        let mut items = self
            .fetcher
            .list_children(parent_id, level.item_type.clone())
            .await?;
        level.sort.sort(&mut items);

        Ok(items
            .iter()
            .filter_map(|item| self.child_node(item, level))
            .collect())
    }

    /// Child node without children; `None` for unplayable leaves
    fn child_node(&self, item: &Item, level: &ChildLevel) -> Option<BrowseMediaSource> {
        if !level.item_type.is_playable() {
            return Some(self.container_node(item, level.media_class));
        }

        let mime_type = media_mime_type(item)?;
        Some(BrowseMediaSource::playable(
            item.id.clone(),
            level.media_class,
            mime_type,
            title(item),
            self.thumbnail_url(item),
        ))
    }

    fn container_node(&self, item: &Item, media_class: MediaClass) -> BrowseMediaSource {
        BrowseMediaSource::container(
            Some(item.id.clone()),
            media_class,
            title(item),
            self.thumbnail_url(item),
        )
    }

    /// Primary artwork URL if the item has a primary image
    fn thumbnail_url(&self, item: &Item) -> Option<String> {
        item.has_image(ImageKind::Primary).then(|| {
            self.client
                .artwork_url(&item.id, ImageKind::Primary, MAX_IMAGE_WIDTH)
        })
    }
}

/// Library node without children; libraries carry no artwork
fn library_node(library: &Item) -> BrowseMediaSource {
    BrowseMediaSource::container(
        Some(library.id.clone()),
        MediaClass::Directory,
        title(library),
        None,
    )
}

fn title(item: &Item) -> String {
    item.name.clone().unwrap_or_default()
}
