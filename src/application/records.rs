//! Untyped records - JSON input checked field by field before it becomes a
//! domain entity.
//!
//! Fields are held as [`serde_json::Value`] so that a wrong JSON type is
//! reported with the same message, and in the same order, as a bad value.

use crate::application::config::CatalogConfig;
use crate::domain::entities::{LibraryItem, LibraryUser, non_blank};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::*;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

/// Integers beyond `i64` are numeric but unrepresentable, so they get
/// `out_of_range` rather than `not_numeric`.
fn integer(
    value: &Value,
    not_numeric: ValidationError,
    out_of_range: ValidationError,
) -> Result<i64, ValidationError> {
    match value.as_i64() {
        Some(number) => Ok(number),
        None if value.is_u64() => Err(out_of_range),
        None => Err(not_numeric),
    }
}

fn member<T>(value: &Value, error: ValidationError) -> Result<T, ValidationError>
where
    T: std::str::FromStr<Err = ValidationError>,
{
    value.as_str().ok_or(error)?.parse()
}

/// Catalog item as it arrives from outside
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    pub title: Value,
    pub author: Value,
    pub genre: Value,
    pub item_id: Value,
    pub is_borrowed: Value,
}

impl ItemRecord {
    pub fn to_item(&self, config: &CatalogConfig) -> Result<LibraryItem, ValidationError> {
        let title = non_blank(text(&self.title), ValidationError::BlankTitle)?;
        let author = non_blank(text(&self.author), ValidationError::BlankAuthor)?;
        let genre: Genre = member(&self.genre, ValidationError::InvalidGenre)?;
        let item_id = integer(
            &self.item_id,
            ValidationError::NonNumericItemId,
            ValidationError::ItemIdOutOfRange,
        )?;
        if config.enforce_item_id_minimum && item_id < MIN_ITEM_ID {
            return Err(ValidationError::ItemIdBelowMinimum);
        }
        let is_borrowed = self
            .is_borrowed
            .as_bool()
            .ok_or(ValidationError::NonBooleanIsBorrowed)?;

        LibraryItem::new(title, author, genre, item_id, is_borrowed)
    }
}

/// Library user as it arrives from outside
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub user_id: Value,
    pub name: Value,
    pub email: Value,
    pub borrower_status: Value,
}

impl UserRecord {
    pub fn to_user(&self, config: &CatalogConfig) -> Result<LibraryUser, ValidationError> {
        let user_id = integer(
            &self.user_id,
            ValidationError::NonNumericUserId,
            ValidationError::UserIdOutOfRange,
        )?;
        let user_id = UserId::new(user_id)?;
        let name = text(&self.name);
        non_blank(name, ValidationError::BlankName)?;
        let email = EmailAddress::parse(text(&self.email), config.email_policy)?;
        let status: BorrowerStatus =
            member(&self.borrower_status, ValidationError::InvalidBorrowerStatus)?;

        Ok(LibraryUser::from_parts(user_id, name.to_string(), email, status))
    }
}

/// A batch of records, the input format of the `check` command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBatch {
    pub items: Vec<ItemRecord>,
    pub users: Vec<UserRecord>,
}

impl RecordBatch {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let batch = serde_json::from_str(json).context("invalid record batch")?;
        Ok(batch)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records '{}'", path.display()))?;
        Self::from_json(&json)
    }
}
