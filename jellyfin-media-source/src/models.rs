// Media Source Models
//
// Node and playback types handed to the host

use serde::{Deserialize, Serialize};

/// Media source domain, first segment of every media content id
pub const DOMAIN: &str = "jellyfin";

/// Semantic category of a node, used by hosts for rendering and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaClass {
    Directory,
    Artist,
    Album,
    Track,
    Movie,
    TvShow,
    Season,
    Episode,
}

impl MediaClass {
    /// Whether nodes of this class can hold children
    #[must_use]
    pub const fn is_expandable(self) -> bool {
        !matches!(self, Self::Track | Self::Movie | Self::Episode)
    }
}

/// A node of the browsable media tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseMediaSource {
    /// Media source domain
    pub domain: String,

    /// Catalog item id, `None` for the synthetic root
    pub identifier: Option<String>,

    pub media_class: MediaClass,

    /// MIME type for playable nodes, `None` otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_content_type: Option<String>,

    pub title: String,

    pub can_play: bool,

    pub can_expand: bool,

    /// Primary artwork URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Media class of `children`, set together with them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_media_class: Option<MediaClass>,

    /// Immediate children, only populated for the browsed node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BrowseMediaSource>>,
}

impl BrowseMediaSource {
    /// Expandable, non-playable node
    pub fn container(
        identifier: Option<String>,
        media_class: MediaClass,
        title: impl Into<String>,
        thumbnail: Option<String>,
    ) -> Self {
        Self {
            domain: DOMAIN.to_string(),
            identifier,
            media_class,
            media_content_type: None,
            title: title.into(),
            can_play: false,
            can_expand: true,
            thumbnail,
            children_media_class: None,
            children: None,
        }
    }

    /// Playable leaf node
    pub fn playable(
        identifier: String,
        media_class: MediaClass,
        mime_type: String,
        title: impl Into<String>,
        thumbnail: Option<String>,
    ) -> Self {
        Self {
            domain: DOMAIN.to_string(),
            identifier: Some(identifier),
            media_class,
            media_content_type: Some(mime_type),
            title: title.into(),
            can_play: true,
            can_expand: false,
            thumbnail,
            children_media_class: None,
            children: None,
        }
    }

    /// Attach children and their media class
    #[must_use]
    pub fn with_children(mut self, media_class: MediaClass, children: Vec<Self>) -> Self {
        self.children_media_class = Some(media_class);
        self.children = Some(children);
        self
    }

    /// `media-source://` URI addressing this node
    #[must_use]
    pub fn media_content_id(&self) -> String {
        match self.identifier {
            Some(ref id) => format!("media-source://{}/{}", self.domain, id),
            None => format!("media-source://{}", self.domain),
        }
    }
}

/// Playable URL with its MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMedia {
    pub url: String,
    pub mime_type: String,
}
