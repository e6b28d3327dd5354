//! # library-catalog
//!
//! A small library catalog domain: catalog items, the users who borrow them,
//! the validation rules that guard both, and the borrow/return transitions of a
//! user's standing.
//!
//! ## Quick Start
//!
//! ```rust
//! use library_catalog::{BorrowerStatus, Genre, LibraryItem, LibraryUser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let item = LibraryItem::new("The Pragmatic Programmer", "Andy Hunt", Genre::NonFiction, 101, false)?;
//! assert_eq!(item.genre(), Genre::NonFiction);
//!
//! let mut user = LibraryUser::new(101, "Enzo Kneipp", "kneippenzo@gmail.com", BorrowerStatus::Delinquent)?;
//! assert!(user.borrow_item().is_err());
//! user.return_item();
//! assert_eq!(user.borrower_status(), BorrowerStatus::Active);
//! # Ok(())
//! # }
//! ```
//!
//! ## Untyped Input
//!
//! ```rust
//! use library_catalog::application::{CatalogConfig, CirculationService, UserRecord};
//!
//! let record: UserRecord = serde_json::from_str(
//!     r#"{"user_id": "one", "name": "Enzo Kneipp", "email": "kneippenzo@gmail.com", "borrower_status": "ACTIVE"}"#,
//! ).unwrap();
//!
//! let service = CirculationService::new(CatalogConfig::default());
//! let error = service.register_user(&record).unwrap_err();
//! assert_eq!(error.to_string(), "User Id must be numeric.");
//! ```

pub mod application;
pub mod domain;

pub use application::{CatalogConfig, CirculationService};
pub use domain::{
    BorrowerStatus, CirculationError, DomainError, EmailPolicy, Genre, LibraryItem, LibraryUser,
    ValidationError,
};
