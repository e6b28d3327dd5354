//! Domain errors - Business rule violations
//!
//! Every `Display` string below is part of the observable contract and is
//! asserted verbatim by the test suites.

use crate::domain::value_objects::BorrowerStatus;
use thiserror::Error;

/// Invalid argument supplied while constructing an item or a user
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be blank.")]
    BlankTitle,

    #[error("Author cannot be blank.")]
    BlankAuthor,

    #[error("Invalid Genre.")]
    InvalidGenre,

    #[error("Item Id must be numeric.")]
    NonNumericItemId,

    #[error("Item Id is out of range.")]
    ItemIdOutOfRange,

    #[error("Invalid Item Id.")]
    ItemIdBelowMinimum,

    #[error("Is Borrowed must be a boolean value.")]
    NonBooleanIsBorrowed,

    #[error("User Id must be numeric.")]
    NonNumericUserId,

    #[error("User Id is out of range.")]
    UserIdOutOfRange,

    #[error("Invalid User Id.")]
    InvalidUserId,

    #[error("Name cannot be blank.")]
    BlankName,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Invalid Borrower Status.")]
    InvalidBorrowerStatus,
}

/// Operation refused because of the borrower's current standing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CirculationError {
    #[error("{name} cannot borrow an item due to their {status} status.")]
    NotPermitted {
        name: String,
        status: BorrowerStatus,
    },
}

impl CirculationError {
    pub fn not_permitted(name: impl Into<String>, status: BorrowerStatus) -> Self {
        Self::NotPermitted {
            name: name.into(),
            status,
        }
    }
}

/// Either kind of domain failure, for callers that handle both uniformly
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    #[error(transparent)]
    NotPermitted(#[from] CirculationError),
}
