//! Status enums for platform entities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Account status for coaches and users.
///
/// Blocked accounts keep their records but lose platform access; the console
/// only ever toggles between these two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Blocked,
}

impl AccountStatus {
    /// Whether the account currently has platform access.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Bootstrap badge class for rendering this status.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-success",
            Self::Blocked => "bg-danger",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Storage bucket status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BucketStatus {
    #[default]
    Active,
    Inactive,
}

impl BucketStatus {
    /// Bootstrap badge class for rendering this status.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-success",
            Self::Inactive => "bg-danger",
        }
    }
}

impl fmt::Display for BucketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}
