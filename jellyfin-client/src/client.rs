//! Jellyfin HTTP Client

use std::sync::LazyLock;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode, header::{HeaderMap, HeaderValue, ACCEPT}};
use tracing::debug;

use super::error::{JellyfinError, check_response, json_with_limit};
use super::types::{ImageKind, Item, ItemsQuery, ItemsResponse};

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URL-encode a string for safe use in query parameters
fn url_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Percent-encode a string for use as a single path segment
fn path_encode(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// Shared HTTP client for all Jellyfin requests (connection pooling)
/// Redirects are disabled to prevent SSRF via redirect to private IPs.
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build Jellyfin shared HTTP client")
});

const X_EMBY_TOKEN: &str = "X-Emby-Token";

/// Containers the universal audio endpoint may direct-stream
const AUDIO_CONTAINERS: &str =
    "opus,webm|opus,mp3,aac,m4a|aac,m4b|aac,flac,webma,webm|webma,wav,ogg";

/// Upper bound handed to the server when it decides whether to transcode
const MAX_STREAMING_BITRATE: u64 = 140_000_000;

/// Jellyfin HTTP Client
#[derive(Debug, Clone)]
pub struct JellyfinClient {
    host: String,
    token: String,
    user_id: String,
    device_id: String,
    client: Client,
}

impl JellyfinClient {
    /// Create a new client for an authenticated user (reuses shared connection pool)
    pub fn with_credentials(
        host: impl Into<String>,
        token: impl Into<String>,
        user_id: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Result<Self, JellyfinError> {
        let host = host.into().trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(JellyfinError::InvalidConfig("Missing host".to_string()));
        }

        let user_id = user_id.into();
        if user_id.is_empty() {
            return Err(JellyfinError::InvalidConfig("Missing user_id".to_string()));
        }

        Ok(Self {
            host,
            token: token.into(),
            user_id,
            device_id: device_id.into(),
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Build request headers
    fn build_headers(&self) -> Result<HeaderMap, JellyfinError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(X_EMBY_TOKEN, HeaderValue::from_str(&self.token)?);
        Ok(headers)
    }

    fn user_url(&self, suffix: &str) -> String {
        format!("{}/Users/{}{}", self.host, path_encode(&self.user_id), suffix)
    }

    /// Get the top-level media folders (user views)
    pub async fn get_media_folders(&self) -> Result<ItemsResponse, JellyfinError> {
        let url = self.user_url("/Views");
        debug!(url = %url, "Fetching Jellyfin media folders");

        let response = self
            .client
            .get(&url)
            .headers(self.build_headers()?)
            .send()
            .await?;

        let response = check_response(response)?;
        let views: ItemsResponse = json_with_limit(response).await?;
        Ok(views)
    }

    /// Query the user's items
    pub async fn query_items(&self, query: &ItemsQuery) -> Result<ItemsResponse, JellyfinError> {
        let url = self.user_url("/Items");
        let params = query.to_params();
        debug!(url = %url, ?params, "Querying Jellyfin items");

        let response = self
            .client
            .get(&url)
            .headers(self.build_headers()?)
            .query(&params)
            .send()
            .await?;

        let response = check_response(response)?;
        let items: ItemsResponse = json_with_limit(response).await?;
        Ok(items)
    }

    /// Get item information
    pub async fn get_item(&self, item_id: &str) -> Result<Item, JellyfinError> {
        let url = self.user_url(&format!("/Items/{}", path_encode(item_id)));
        debug!(url = %url, "Fetching Jellyfin item");

        let response = self
            .client
            .get(&url)
            .headers(self.build_headers()?)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(JellyfinError::NotFound(item_id.to_string()));
        }

        let response = check_response(response)?;
        let item: Item = json_with_limit(response).await?;
        Ok(item)
    }

    /// Universal audio stream URL, letting the server pick direct play or transcode
    #[must_use]
    pub fn audio_stream_url(&self, item_id: &str) -> String {
        format!(
            "{}/Audio/{}/universal?UserId={}&DeviceId={}&MaxStreamingBitrate={}&Container={}\
             &TranscodingContainer=ts&TranscodingProtocol=hls&AudioCodec=aac&api_key={}\
             &StartTimeTicks=0&EnableRedirection=true&EnableRemoteMedia=false",
            self.host,
            path_encode(item_id),
            url_encode(&self.user_id),
            url_encode(&self.device_id),
            MAX_STREAMING_BITRATE,
            url_encode(AUDIO_CONTAINERS),
            url_encode(&self.token),
        )
    }

    /// Static (non-transcoded) video stream URL
    #[must_use]
    pub fn video_stream_url(&self, item_id: &str) -> String {
        format!(
            "{}/Videos/{}/stream?static=true&DeviceId={}&api_key={}",
            self.host,
            path_encode(item_id),
            url_encode(&self.device_id),
            url_encode(&self.token),
        )
    }

    /// Artwork URL for an item image, scaled down to `max_width`
    #[must_use]
    pub fn artwork_url(&self, item_id: &str, kind: ImageKind, max_width: u32) -> String {
        format!(
            "{}/Items/{}/Images/{}?MaxWidth={}&format=jpg",
            self.host,
            path_encode(item_id),
            kind.as_str(),
            max_width,
        )
    }

    /// Get host URL
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the user the client acts for
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> JellyfinClient {
        JellyfinClient::with_credentials(
            "https://jellyfin.example.com/",
            "token123",
            "user1",
            "device1",
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.host(), "https://jellyfin.example.com");
        assert_eq!(client.user_id(), "user1");
    }

    #[test]
    fn test_client_requires_host_and_user() {
        assert!(matches!(
            JellyfinClient::with_credentials("", "t", "u", "d"),
            Err(JellyfinError::InvalidConfig(_))
        ));
        assert!(matches!(
            JellyfinClient::with_credentials("https://jf.local", "t", "", "d"),
            Err(JellyfinError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_video_stream_url() {
        assert_eq!(
            client().video_stream_url("movie 1"),
            "https://jellyfin.example.com/Videos/movie%201/stream?static=true&DeviceId=device1&api_key=token123"
        );
    }

    #[test]
    fn test_path_and_query_encoding_differ() {
        assert_eq!(path_encode("a b+c/d"), "a%20b%2Bc%2Fd");
        assert_eq!(url_encode("a b"), "a+b");
        assert_eq!(path_encode("0f3a-9_b.c~"), "0f3a-9_b.c~");
    }

    #[test]
    fn test_ids_with_spaces_stay_literal_in_paths() {
        let client = client();
        assert!(client
            .audio_stream_url("a b")
            .starts_with("https://jellyfin.example.com/Audio/a%20b/universal?"));
        assert_eq!(
            client.artwork_url("a b", ImageKind::Primary, 500),
            "https://jellyfin.example.com/Items/a%20b/Images/Primary?MaxWidth=500&format=jpg"
        );
    }

    #[test]
    fn test_audio_stream_url() {
        let url = client().audio_stream_url("track1");
        assert!(url.starts_with("https://jellyfin.example.com/Audio/track1/universal?UserId=user1"));
        assert!(url.contains("&api_key=token123"));
        assert!(url.contains("&DeviceId=device1"));
        assert!(url.contains("&MaxStreamingBitrate=140000000"));
    }

    #[test]
    fn test_artwork_url() {
        assert_eq!(
            client().artwork_url("album1", ImageKind::Primary, 500),
            "https://jellyfin.example.com/Items/album1/Images/Primary?MaxWidth=500&format=jpg"
        );
    }
}
