//! Domain entities - Catalog items and the users who borrow them

use crate::domain::errors::{CirculationError, ValidationError};
use crate::domain::value_objects::*;
use serde::Serialize;

/// Returns `text` trimmed, or `error` if nothing is left.
pub(crate) fn non_blank(text: &str, error: ValidationError) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed)
}

/// A catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryItem {
    title: String,
    author: String,
    genre: Genre,
    item_id: i64,
    is_borrowed: bool,
}

impl LibraryItem {
    /// Validates the fields and stores title and author trimmed.
    ///
    /// The item id is not range-checked here; see
    /// [`CatalogConfig`](crate::application::config::CatalogConfig) for the
    /// opt-in minimum.
    pub fn new(
        title: &str,
        author: &str,
        genre: Genre,
        item_id: i64,
        is_borrowed: bool,
    ) -> Result<Self, ValidationError> {
        let title = non_blank(title, ValidationError::BlankTitle)?;
        let author = non_blank(author, ValidationError::BlankAuthor)?;

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            genre,
            item_id,
            is_borrowed,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn item_id(&self) -> i64 {
        self.item_id
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }
}

/// A borrower. Only `borrower_status` changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryUser {
    user_id: UserId,
    name: String,
    email: EmailAddress,
    borrower_status: BorrowerStatus,
}

impl LibraryUser {
    /// Validates with the default [`EmailPolicy`].
    pub fn new(
        user_id: i64,
        name: &str,
        email: &str,
        borrower_status: BorrowerStatus,
    ) -> Result<Self, ValidationError> {
        Self::with_email_policy(user_id, name, email, borrower_status, EmailPolicy::default())
    }

    pub fn with_email_policy(
        user_id: i64,
        name: &str,
        email: &str,
        borrower_status: BorrowerStatus,
        policy: EmailPolicy,
    ) -> Result<Self, ValidationError> {
        let user_id = UserId::new(user_id)?;
        non_blank(name, ValidationError::BlankName)?;
        let email = EmailAddress::parse(email, policy)?;

        Ok(Self::from_parts(user_id, name.to_string(), email, borrower_status))
    }

    /// Assembles a user from already-validated parts. `name` is stored as given.
    pub(crate) fn from_parts(
        user_id: UserId,
        name: String,
        email: EmailAddress,
        borrower_status: BorrowerStatus,
    ) -> Self {
        Self {
            user_id,
            name,
            email,
            borrower_status,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id.get()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn borrower_status(&self) -> BorrowerStatus {
        self.borrower_status
    }

    pub fn can_borrow(&self) -> bool {
        self.borrower_status != BorrowerStatus::Delinquent
    }

    /// Checks borrowing eligibility. Never changes the status.
    pub fn borrow_item(&self) -> Result<String, CirculationError> {
        if !self.can_borrow() {
            return Err(CirculationError::not_permitted(
                self.name.clone(),
                self.borrower_status,
            ));
        }
        Ok(format!("{} is eligible to borrow the item.", self.name))
    }

    /// Records a return. A delinquent borrower becomes active again.
    pub fn return_item(&mut self) -> String {
        if self.borrower_status == BorrowerStatus::Delinquent {
            self.borrower_status = BorrowerStatus::Active;
            return format!(
                "Item successfully returned. {} has returned the item, status now changed to: {}.",
                self.name, self.borrower_status
            );
        }
        "Item successfully returned.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  x  ", ValidationError::BlankTitle), Ok("x"));
        assert_eq!(
            non_blank(" \t\n", ValidationError::BlankAuthor),
            Err(ValidationError::BlankAuthor)
        );
    }

    #[test]
    fn inactive_user_may_borrow_and_stays_inactive() {
        let mut user =
            LibraryUser::new(150, "Ines", "ines@example.com", BorrowerStatus::Inactive).unwrap();
        assert_eq!(user.borrow_item().unwrap(), "Ines is eligible to borrow the item.");
        assert_eq!(user.return_item(), "Item successfully returned.");
        assert_eq!(user.borrower_status(), BorrowerStatus::Inactive);
    }

    #[test]
    fn user_serializes_flat() {
        let user =
            LibraryUser::new(101, "Enzo Kneipp", "kneippenzo@gmail.com", BorrowerStatus::Active)
                .unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["user_id"], 101);
        assert_eq!(value["email"], "kneippenzo@gmail.com");
        assert_eq!(value["borrower_status"], "ACTIVE");
    }
}
