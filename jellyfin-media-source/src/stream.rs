// Stream URL Resolution

use jellyfin_client::{Item, MediaType};

use crate::catalog::CatalogClient;
use crate::error::{MediaSourceError, Result};

/// Stream URL for a playable item, chosen by its media type
pub fn stream_url(client: &dyn CatalogClient, item: &Item) -> Result<String> {
    match item.media_type {
        Some(MediaType::Audio) => Ok(client.audio_stream_url(&item.id)),
        Some(MediaType::Video) => Ok(client.video_stream_url(&item.id)),
        Some(MediaType::Other(ref media_type)) => Err(MediaSourceError::Browse(format!(
            "Unsupported media type {media_type}"
        ))),
        None => Err(MediaSourceError::Browse(
            "Unsupported media type (none)".to_string(),
        )),
    }
}
