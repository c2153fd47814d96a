//! Tests for feed-model types.

use feed_model::{FeedDocument, FeedField, FeedItem, GOOGLE_NAMESPACE_URL, Row};

#[test]
fn item_starts_with_id() {
    let mut item = FeedItem::new("42");
    item.push(FeedField::Title, "Shirt");
    item.push(FeedField::Price, "10.00 BRL");

    assert_eq!(item.id(), "42");
    assert_eq!(item.fields()[0], (FeedField::Id, "42".to_string()));
    assert_eq!(item.get(FeedField::Price), Some("10.00 BRL"));
    assert_eq!(item.get(FeedField::Brand), None);
}

#[test]
fn document_declares_rss_namespace() {
    let mut document = FeedDocument::new();
    assert!(document.is_empty());
    document.push_item(FeedItem::new("1"));

    assert_eq!(document.len(), 1);
    assert_eq!(document.version(), "2.0");
    assert_eq!(document.namespace(), ("g", GOOGLE_NAMESPACE_URL));
}

#[test]
fn document_serializes() {
    let mut item = FeedItem::new("7");
    item.push(FeedField::ImageLink, "https://example.com/7.png");
    let mut document = FeedDocument::new();
    document.push_item(item);

    let json = serde_json::to_value(&document).expect("serialize document");
    assert_eq!(json["items"][0]["fields"][0][0], "id");
    assert_eq!(json["items"][0]["fields"][1][0], "image_link");
    assert_eq!(json["items"][0]["fields"][1][1], "https://example.com/7.png");
}

#[test]
fn row_serializes_cells_in_column_order() {
    let row = Row::new().with("title", "Shirt").with("id", "1.0");
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["cells"][0][0], "title");
    assert_eq!(json["cells"][1][1], "1.0");
}

#[test]
fn row_lookup_returns_first_match() {
    let row = Row::new().with("id", "1.0").with("id", "2.0");
    assert_eq!(row.get("id"), Some("1.0"));
    assert_eq!(row.len(), 2);
}
