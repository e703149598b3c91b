//! Wire format of the catalog's `/volumes` endpoint and its normalization

use std::collections::HashSet;

use serde::Deserialize;

use super::error::FetchError;
use super::types::CatalogItem;

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    id: String,
    // Explicit nulls show up for both blocks
    volume_info: Option<VolumeInfo>,
    sale_info: Option<SaleInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    info_link: Option<String>,
    preview_link: Option<String>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaleInfo {
    buy_link: Option<String>,
}

impl From<Volume> for CatalogItem {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info.unwrap_or_default();
        Self {
            id: volume.id,
            title: info.title.unwrap_or_default(),
            authors: info.authors.unwrap_or_default(),
            description: info.description.filter(|d| !d.trim().is_empty()),
            info_link: info.info_link,
            preview_link: info.preview_link,
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
            buy_link: volume.sale_info.and_then(|sale| sale.buy_link),
        }
    }
}

/// Parse a `/volumes` response body into normalized items.
///
/// A missing `items` array is an empty result. Duplicate ids keep their first
/// occurrence so one result list never repeats an item.
pub fn parse_volumes(body: &str) -> Result<Vec<CatalogItem>, FetchError> {
    let response: VolumesResponse = serde_json::from_str(body)?;
    let mut seen = HashSet::new();

    Ok(response
        .items
        .unwrap_or_default()
        .into_iter()
        .filter(|volume| seen.insert(volume.id.clone()))
        .map(CatalogItem::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "abc123",
                "volumeInfo": {
                    "title": "Learning Rust",
                    "authors": ["Ferris", "Graydon"],
                    "description": "A friendly crab explains ownership.",
                    "infoLink": "https://books.example/abc123/info",
                    "previewLink": "https://books.example/abc123/preview",
                    "imageLinks": {
                        "smallThumbnail": "https://books.example/abc123/small.jpg",
                        "thumbnail": "https://books.example/abc123/thumb.jpg"
                    }
                },
                "saleInfo": { "country": "US", "buyLink": "https://books.example/abc123/buy" }
            },
            {
                "id": "def456",
                "volumeInfo": { "title": "Bare Volume" }
            }
        ]
    }"#;

    #[test]
    fn maps_all_known_fields() {
        let items = parse_volumes(FULL_RESPONSE).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.id, "abc123");
        assert_eq!(first.title, "Learning Rust");
        assert_eq!(first.authors, vec!["Ferris", "Graydon"]);
        assert_eq!(first.description.as_deref(), Some("A friendly crab explains ownership."));
        assert_eq!(first.thumbnail_url.as_deref(), Some("https://books.example/abc123/thumb.jpg"));
        assert_eq!(first.buy_link.as_deref(), Some("https://books.example/abc123/buy"));
    }

    #[test]
    fn missing_optional_fields_are_empty_not_errors() {
        let items = parse_volumes(FULL_RESPONSE).unwrap();
        let bare = &items[1];
        assert!(bare.authors.is_empty());
        assert_eq!(bare.description, None);
        assert_eq!(bare.thumbnail_url, None);
        assert_eq!(bare.buy_link, None);
        assert_eq!(bare.byline(), "");
    }

    #[test]
    fn absent_items_is_an_empty_list() {
        let items = parse_volumes(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(items.is_empty());

        let items = parse_volumes(r#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let body = r#"{"items": [
            {"id": "same", "volumeInfo": {"title": "First"}},
            {"id": "other", "volumeInfo": {"title": "Other"}},
            {"id": "same", "volumeInfo": {"title": "Second"}}
        ]}"#;
        let items = parse_volumes(body).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Other"]);
    }

    #[test]
    fn explicit_nulls_are_treated_as_missing() {
        let body = r#"{"items": [
            {"id": "a", "volumeInfo": {"title": "T", "authors": null, "imageLinks": null}, "saleInfo": null},
            {"id": "b", "volumeInfo": null}
        ]}"#;
        let items = parse_volumes(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "T");
        assert!(items[0].authors.is_empty());
        assert_eq!(items[0].thumbnail_url, None);
        assert_eq!(items[0].buy_link, None);
        assert_eq!(items[1].display_title(), "Untitled");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_volumes("{\"items\": [").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn item_without_id_is_a_parse_error() {
        let err = parse_volumes(r#"{"items": [{"volumeInfo": {"title": "No id"}}]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }
}
