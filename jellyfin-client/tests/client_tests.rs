//! HTTP-level tests for the Jellyfin client.
//!
//! These tests run the client against wiremock servers, so no real Jellyfin
//! instance is needed.

use jellyfin_client::{
    CollectionType, ItemField, ItemType, ItemsQuery, JellyfinClient, JellyfinError,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> JellyfinClient {
    JellyfinClient::with_credentials(server.uri(), "secret-token", "user-1", "device-1").unwrap()
}

#[tokio::test]
async fn test_get_media_folders() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Views"))
        .and(header("X-Emby-Token", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Items": [
                { "Id": "lib-music", "Name": "Music", "Type": "CollectionFolder", "CollectionType": "music" },
                { "Id": "lib-photos", "Name": "Photos", "Type": "CollectionFolder", "CollectionType": "homevideos" }
            ],
            "TotalRecordCount": 2
        })))
        .mount(&mock_server)
        .await;

    let folders = client_for(&mock_server).get_media_folders().await.unwrap();

    assert_eq!(folders.total_record_count, 2);
    assert_eq!(folders.items.len(), 2);
    assert_eq!(folders.items[0].collection_type, Some(CollectionType::Music));
    assert_eq!(
        folders.items[1].collection_type,
        Some(CollectionType::Other("homevideos".to_string()))
    );
}

#[tokio::test]
async fn test_query_items_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Items"))
        .and(query_param("ParentId", "album-1"))
        .and(query_param("IncludeItemTypes", "Audio"))
        .and(query_param("Recursive", "true"))
        .and(query_param("Fields", "MediaSources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Items": [
                {
                    "Id": "t1",
                    "Name": "Song",
                    "Type": "Audio",
                    "IndexNumber": 3,
                    "MediaType": "Audio",
                    "MediaSources": [{ "Path": "/music/song.mp3" }]
                }
            ],
            "TotalRecordCount": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = ItemsQuery::descendants_of("album-1")
        .with_item_type(ItemType::Audio)
        .with_field(ItemField::MediaSources);
    let result = client_for(&mock_server).query_items(&query).await.unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].index_number, Some(3));
}

#[tokio::test]
async fn test_get_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Items/movie-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "movie-9",
            "Name": "Feature",
            "Type": "Movie",
            "MediaType": "Video",
            "ImageTags": { "Primary": "abc" }
        })))
        .mount(&mock_server)
        .await;

    let item = client_for(&mock_server).get_item("movie-9").await.unwrap();

    assert_eq!(item.id, "movie-9");
    assert_eq!(item.item_type, ItemType::Movie);
}

#[tokio::test]
async fn test_get_item_with_space_in_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Items/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "a b",
            "Name": "Spaced",
            "Type": "MusicAlbum"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let item = client_for(&mock_server).get_item("a b").await.unwrap();

    assert_eq!(item.id, "a b");
    assert_eq!(item.item_type, ItemType::Album);
}

#[tokio::test]
async fn test_get_item_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Items/stale"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).get_item("stale").await;

    match result {
        Err(JellyfinError::NotFound(id)) => assert_eq!(id, "stale"),
        other => panic!("Expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Views"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).get_media_folders().await;

    match result {
        Err(JellyfinError::Http { status, .. }) => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Users/user-1/Items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .query_items(&ItemsQuery::descendants_of("lib"))
        .await;

    assert!(matches!(result, Err(JellyfinError::Parse(_))));
}
