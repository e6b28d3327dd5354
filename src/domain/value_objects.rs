//! Domain value objects - Immutable objects that describe aspects of the domain

use crate::domain::errors::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Macro to implement naming and parsing for closed vocabularies
macro_rules! impl_vocabulary {
    ($type:ident, $error:expr, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $type {
            /// Every member, in declaration order
            pub const ALL: &'static [$type] = &[$($type::$variant),+];

            /// Canonical upper-snake name of the member
            pub fn name(&self) -> &'static str {
                match self {
                    $($type::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $type {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name().eq_ignore_ascii_case(wanted))
                    .ok_or($error)
            }
        }

        impl TryFrom<String> for $type {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

/// Literary category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    Poetry,
}

impl_vocabulary!(Genre, ValidationError::InvalidGenre, {
    Fiction => "FICTION",
    NonFiction => "NON_FICTION",
    Mystery => "MYSTERY",
    ScienceFiction => "SCIENCE_FICTION",
    Fantasy => "FANTASY",
    Biography => "BIOGRAPHY",
    History => "HISTORY",
    Poetry => "POETRY",
});

/// Standing of a borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum BorrowerStatus {
    Active,
    Inactive,
    Delinquent,
}

impl_vocabulary!(BorrowerStatus, ValidationError::InvalidBorrowerStatus, {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Delinquent => "DELINQUENT",
});

/// Smallest accepted user id.
pub const MIN_USER_ID: i64 = 100;

/// Smallest item id when the minimum is enforced.
pub const MIN_ITEM_ID: i64 = 100;

/// Identifier of a library user; always greater than 99
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id < MIN_USER_ID {
            return Err(ValidationError::InvalidUserId);
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule deciding whether a string is a plausible email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailPolicy {
    /// Must contain both `@` and `.`
    #[default]
    Basic,
    /// Must match `local@domain.tld`
    Strict,
}

static STRICT_EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn strict_email_regex() -> &'static Regex {
    STRICT_EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl EmailPolicy {
    pub fn accepts(&self, email: &str) -> bool {
        match self {
            EmailPolicy::Basic => email.contains('@') && email.contains('.'),
            EmailPolicy::Strict => strict_email_regex().is_match(email),
        }
    }
}

/// Email address accepted under some [`EmailPolicy`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(email: impl Into<String>, policy: EmailPolicy) -> Result<Self, ValidationError> {
        let email = email.into();
        if !policy.accepts(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
