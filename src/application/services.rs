//! Application services - Circulation desk operations

use crate::application::config::CatalogConfig;
use crate::application::records::{ItemRecord, RecordBatch, UserRecord};
use crate::domain::entities::{LibraryItem, LibraryUser};
use crate::domain::errors::{CirculationError, ValidationError};

/// Outcome of checking one record of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome<T> {
    /// Position of the record in its list
    pub index: usize,
    pub result: Result<T, ValidationError>,
}

/// Per-record results of [`CirculationService::check_batch`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub items: Vec<RecordOutcome<LibraryItem>>,
    pub users: Vec<RecordOutcome<LibraryUser>>,
}

impl BatchReport {
    pub fn rejected_count(&self) -> usize {
        let items = self.items.iter().filter(|o| o.result.is_err()).count();
        let users = self.users.iter().filter(|o| o.result.is_err()).count();
        items + users
    }

    pub fn is_clean(&self) -> bool {
        self.rejected_count() == 0
    }
}

/// Applies a [`CatalogConfig`] to incoming records and logs circulation
/// decisions.
#[derive(Debug, Clone, Default)]
pub struct CirculationService {
    config: CatalogConfig,
}

impl CirculationService {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn register_item(&self, record: &ItemRecord) -> Result<LibraryItem, ValidationError> {
        match record.to_item(&self.config) {
            Ok(item) => {
                log::debug!("Accepted item {} '{}'", item.item_id(), item.title());
                Ok(item)
            }
            Err(error) => {
                log::warn!("Rejected item record: {}", error);
                Err(error)
            }
        }
    }

    pub fn register_user(&self, record: &UserRecord) -> Result<LibraryUser, ValidationError> {
        match record.to_user(&self.config) {
            Ok(user) => {
                log::debug!("Accepted user {} '{}'", user.user_id(), user.name());
                Ok(user)
            }
            Err(error) => {
                log::warn!("Rejected user record: {}", error);
                Err(error)
            }
        }
    }

    pub fn borrow(&self, user: &LibraryUser) -> Result<String, CirculationError> {
        let result = user.borrow_item();
        match &result {
            Ok(_) => log::debug!("User {} may borrow", user.user_id()),
            Err(error) => log::warn!("Borrow refused for user {}: {}", user.user_id(), error),
        }
        result
    }

    pub fn return_item(&self, user: &mut LibraryUser) -> String {
        let before = user.borrower_status();
        let message = user.return_item();
        if before != user.borrower_status() {
            log::info!(
                "User {} status changed from {} to {}",
                user.user_id(),
                before,
                user.borrower_status()
            );
        }
        message
    }

    pub fn check_batch(&self, batch: &RecordBatch) -> BatchReport {
        let items = batch
            .items
            .iter()
            .enumerate()
            .map(|(index, record)| RecordOutcome {
                index,
                result: self.register_item(record),
            })
            .collect();
        let users = batch
            .users
            .iter()
            .enumerate()
            .map(|(index, record)| RecordOutcome {
                index,
                result: self.register_user(record),
            })
            .collect();

        let report = BatchReport { items, users };
        log::info!(
            "Checked {} item(s) and {} user(s), {} rejected",
            report.items.len(),
            report.users.len(),
            report.rejected_count()
        );
        report
    }
}
