//! LibraryItem construction tests
//! Covers the validation order, exact messages, and accessor round-trips

use library_catalog::application::{CatalogConfig, ItemRecord};
use library_catalog::{Genre, LibraryItem, ValidationError};
use serde_json::json;

fn record(value: serde_json::Value) -> ItemRecord {
    serde_json::from_value(value).expect("record should deserialize")
}

#[test]
fn test_init_valid() {
    let item = LibraryItem::new("Title", "Author", Genre::Fiction, 1, false).unwrap();
    assert_eq!(item.title(), "Title");
    assert_eq!(item.author(), "Author");
    assert_eq!(item.genre(), Genre::Fiction);
    assert_eq!(item.item_id(), 1);
    assert!(!item.is_borrowed());
}

#[test]
fn test_pragmatic_programmer_round_trip() {
    let item = LibraryItem::new(
        "The Pragmatic Programmer",
        "Andy Hunt",
        Genre::NonFiction,
        101,
        false,
    )
    .unwrap();
    assert_eq!(item.title(), "The Pragmatic Programmer");
    assert_eq!(item.author(), "Andy Hunt");
    assert_eq!(item.genre(), Genre::NonFiction);
    assert_eq!(item.item_id(), 101);
    assert!(!item.is_borrowed());
}

#[test]
fn test_text_fields_are_trimmed() {
    let item = LibraryItem::new("  Dune \n", "\tFrank Herbert ", Genre::ScienceFiction, 7, true)
        .unwrap();
    assert_eq!(item.title(), "Dune");
    assert_eq!(item.author(), "Frank Herbert");
    assert!(item.is_borrowed());
}

#[test]
fn test_blank_title_rejected() {
    for title in ["", " ", "   \t\n"] {
        let err = LibraryItem::new(title, "Author", Genre::Fiction, 1, false).unwrap_err();
        assert_eq!(err, ValidationError::BlankTitle);
        assert_eq!(err.to_string(), "Title cannot be blank.");
    }
}

#[test]
fn test_blank_author_rejected() {
    for author in ["", "  ", "\n"] {
        let err = LibraryItem::new("Title", author, Genre::Fiction, 1, false).unwrap_err();
        assert_eq!(err.to_string(), "Author cannot be blank.");
    }
}

#[test]
fn test_title_checked_before_author() {
    let err = LibraryItem::new("", "", Genre::Fiction, 1, false).unwrap_err();
    assert_eq!(err, ValidationError::BlankTitle);
}

#[test]
fn test_item_id_has_no_minimum_by_default() {
    let item = LibraryItem::new("Title", "Author", Genre::Poetry, -3, false).unwrap();
    assert_eq!(item.item_id(), -3);
}

#[test]
fn test_record_invalid_genre() {
    let item = record(json!({
        "title": "Title", "author": "Author", "genre": "InvalidGenre",
        "item_id": 1, "is_borrowed": false
    }));
    let err = item.to_item(&CatalogConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Genre.");
}

#[test]
fn test_record_invalid_item_id() {
    let item = record(json!({
        "title": "Title", "author": "Author", "genre": "FICTION",
        "item_id": "InvalidId", "is_borrowed": false
    }));
    let err = item.to_item(&CatalogConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Item Id must be numeric.");
}

#[test]
fn test_record_invalid_is_borrowed() {
    for bad in [json!("InvalidBool"), json!(0), json!(null)] {
        let item = record(json!({
            "title": "Title", "author": "Author", "genre": "FICTION",
            "item_id": 1, "is_borrowed": bad
        }));
        let err = item.to_item(&CatalogConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Is Borrowed must be a boolean value.");
    }
}

#[test]
fn test_record_first_violation_wins() {
    let item = record(json!({
        "title": "Title", "author": " ", "genre": "nope",
        "item_id": "x", "is_borrowed": "y"
    }));
    let err = item.to_item(&CatalogConfig::default()).unwrap_err();
    assert_eq!(err, ValidationError::BlankAuthor);
}

#[test]
fn test_record_valid_matches_typed_constructor() {
    let item = record(json!({
        "title": " The Pragmatic Programmer ", "author": "Andy Hunt", "genre": "non_fiction",
        "item_id": 101, "is_borrowed": false
    }));
    let from_record = item.to_item(&CatalogConfig::default()).unwrap();
    let typed = LibraryItem::new(
        "The Pragmatic Programmer",
        "Andy Hunt",
        Genre::NonFiction,
        101,
        false,
    )
    .unwrap();
    assert_eq!(from_record, typed);
}

#[test]
fn test_enforced_item_id_minimum() {
    let config = CatalogConfig {
        enforce_item_id_minimum: true,
        ..CatalogConfig::default()
    };
    let below = record(json!({
        "title": "T", "author": "A", "genre": "HISTORY", "item_id": 99, "is_borrowed": "y"
    }));
    assert_eq!(
        below.to_item(&config).unwrap_err().to_string(),
        "Invalid Item Id."
    );

    let at = record(json!({
        "title": "T", "author": "A", "genre": "HISTORY", "item_id": 100, "is_borrowed": true
    }));
    assert_eq!(at.to_item(&config).unwrap().item_id(), 100);
}
