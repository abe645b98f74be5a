// MIME Type Resolution
//
// Content type of an item, inferred from the file path of its first media source

use jellyfin_client::Item;
use tracing::debug;

/// MIME type of a media item, `None` when it cannot be derived
///
/// Only the first media source is inspected. Items without media sources,
/// sources without a path, and paths with an unknown extension all yield
/// `None`; such items cannot be played.
#[must_use]
pub fn media_mime_type(item: &Item) -> Option<String> {
    let Some(media_source) = item.first_media_source() else {
        debug!(item_id = %item.id, "Unable to determine mime type for item without media source");
        return None;
    };

    let Some(ref path) = media_source.path else {
        debug!(item_id = %item.id, "Unable to determine mime type for media source without path");
        return None;
    };

    let mime_type = mime_guess::from_path(path).first().map(|mime| mime.to_string());

    if mime_type.is_none() {
        debug!(
            item_id = %item.id,
            "Unable to determine mime type for path {}",
            basename(path)
        );
    }

    mime_type
}

/// Final path component; server paths may use either separator
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyfin_client::{ItemType, MediaSource};

    fn item_with_sources(sources: Option<Vec<MediaSource>>) -> Item {
        let mut item = Item::new("item-1", ItemType::Audio);
        item.media_sources = sources;
        item
    }

    fn source(path: Option<&str>) -> MediaSource {
        MediaSource {
            path: path.map(str::to_string),
            ..MediaSource::default()
        }
    }

    #[test]
    fn test_no_media_sources() {
        assert_eq!(media_mime_type(&item_with_sources(None)), None);
        assert_eq!(media_mime_type(&item_with_sources(Some(vec![]))), None);
    }

    #[test]
    fn test_first_source_without_path() {
        let item = item_with_sources(Some(vec![source(None), source(Some("/music/a.mp3"))]));
        assert_eq!(media_mime_type(&item), None);
    }

    #[test]
    fn test_audio_path() {
        let item = item_with_sources(Some(vec![source(Some("/music/album/01 - intro.mp3"))]));
        let mime = media_mime_type(&item).unwrap();
        assert!(mime.starts_with("audio/"), "{mime}");
    }

    #[test]
    fn test_video_path() {
        let item = item_with_sources(Some(vec![source(Some("/movies/Feature (2020).mp4"))]));
        assert_eq!(media_mime_type(&item).as_deref(), Some("video/mp4"));
    }

    #[test]
    fn test_only_first_source_counts() {
        let item = item_with_sources(Some(vec![
            source(Some("/movies/feature.mkv")),
            source(Some("/movies/feature.mp4")),
        ]));
        let mime = media_mime_type(&item).unwrap();
        assert!(mime.starts_with("video/"), "{mime}");
        assert_ne!(mime, "video/mp4");
    }

    #[test]
    fn test_unknown_extension() {
        let item = item_with_sources(Some(vec![source(Some("/data/file.zzzunknown"))]));
        assert_eq!(media_mime_type(&item), None);

        let item = item_with_sources(Some(vec![source(Some("/data/no_extension"))]));
        assert_eq!(media_mime_type(&item), None);
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/music/a.mp3"), "a.mp3");
        assert_eq!(basename("D:\\Media\\b.flac"), "b.flac");
        assert_eq!(basename("c.ogg"), "c.ogg");
    }
}
