//! Jellyfin HTTP API Types
//!
//! Typed views of the Jellyfin JSON records used for catalog browsing.
//! Every field the server may omit is an `Option`, so "missing" and
//! "present" stay distinguishable after decoding.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a string-backed enum whose unknown wire values are preserved
/// verbatim in an `Other` variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client, kept as sent by the server
            Other(String),
        }

        impl $name {
            /// Wire representation
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Catalog item type (`Type`)
    pub enum ItemType {
        /// Top-level library folder
        Library => "CollectionFolder",
        Artist => "MusicArtist",
        Album => "MusicAlbum",
        Audio => "Audio",
        Series => "Series",
        Season => "Season",
        Episode => "Episode",
        Movie => "Movie",
    }
}

impl ItemType {
    /// Leaf types that resolve to a stream and need media sources to do so
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        matches!(self, Self::Audio | Self::Movie | Self::Episode)
    }
}

wire_enum! {
    /// Library collection type (`CollectionType`)
    pub enum CollectionType {
        Music => "music",
        Movies => "movies",
        TvShows => "tvshows",
    }
}

impl CollectionType {
    /// Whether libraries of this type can be browsed
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

wire_enum! {
    /// Item media type (`MediaType`)
    pub enum MediaType {
        Audio => "Audio",
        Video => "Video",
    }
}

/// Image kinds accepted by the artwork endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Primary,
}

impl ImageKind {
    /// Name used both in `ImageTags` keys and artwork URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
        }
    }
}

/// Optional item fields that must be requested explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    MediaSources,
}

impl ItemField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MediaSources => "MediaSources",
        }
    }
}

/// One streamable representation of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Filesystem path on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// Catalog item as returned by the item endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<CollectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_sources: Option<Vec<MediaSource>>,
}

impl Item {
    /// Create an item with only id and type set
    pub fn new(id: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: None,
            item_type,
            collection_type: None,
            index_number: None,
            media_type: None,
            image_tags: None,
            media_sources: None,
        }
    }

    /// Whether the item carries an image tag of the given kind
    #[must_use]
    pub fn has_image(&self, kind: ImageKind) -> bool {
        self.image_tags
            .as_ref()
            .is_some_and(|tags| tags.contains_key(kind.as_str()))
    }

    /// First declared media source, if any
    #[must_use]
    pub fn first_media_source(&self) -> Option<&MediaSource> {
        self.media_sources.as_deref().and_then(<[MediaSource]>::first)
    }
}

/// Items list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total_record_count: u64,
}

/// Filter for the user items query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsQuery {
    pub parent_id: Option<String>,
    pub include_item_types: Vec<ItemType>,
    pub recursive: bool,
    pub fields: Vec<ItemField>,
}

impl ItemsQuery {
    /// Query all descendants of `parent_id`
    pub fn descendants_of(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            recursive: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.include_item_types.push(item_type);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: ItemField) -> Self {
        self.fields.push(field);
        self
    }

    /// Query string parameters in Jellyfin naming
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.recursive {
            params.push(("Recursive", "true".to_string()));
        }
        if let Some(ref parent_id) = self.parent_id {
            params.push(("ParentId", parent_id.clone()));
        }
        if !self.include_item_types.is_empty() {
            let types: Vec<&str> = self.include_item_types.iter().map(ItemType::as_str).collect();
            params.push(("IncludeItemTypes", types.join(",")));
        }
        if !self.fields.is_empty() {
            let fields: Vec<&str> = self.fields.iter().map(|f| f.as_str()).collect();
            params.push(("Fields", fields.join(",")));
        }
        params
    }
}
