//! Fixed department and priority classifications.

use super::{ParseDepartmentError, ParsePriorityError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility department responsible for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// General facilities.
    Facilities,
    /// Housekeeping.
    Housekeeping,
    /// Security.
    Security,
    /// Engineering.
    Engineering,
    /// Food service.
    FoodService,
    /// Front office.
    FrontOffice,
    /// Grounds.
    Grounds,
    /// IT.
    It,
    /// Finance.
    Finance,
    /// Administration.
    Administration,
}

impl Department {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facilities => "facilities",
            Self::Housekeeping => "housekeeping",
            Self::Security => "security",
            Self::Engineering => "engineering",
            Self::FoodService => "food_service",
            Self::FrontOffice => "front_office",
            Self::Grounds => "grounds",
            Self::It => "it",
            Self::Finance => "finance",
            Self::Administration => "administration",
        }
    }
}

impl TryFrom<&str> for Department {
    type Error = ParseDepartmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "facilities" => Ok(Self::Facilities),
            "housekeeping" => Ok(Self::Housekeeping),
            "security" => Ok(Self::Security),
            "engineering" => Ok(Self::Engineering),
            "food_service" => Ok(Self::FoodService),
            "front_office" => Ok(Self::FrontOffice),
            "grounds" => Ok(Self::Grounds),
            "it" => Ok(Self::It),
            "finance" => Ok(Self::Finance),
            "administration" => Ok(Self::Administration),
            _ => Err(ParseDepartmentError(value.to_owned())),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention immediately.
    Urgent,
    /// Standard turnaround.
    Normal,
    /// Handle when capacity allows.
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "urgent" => Ok(Self::Urgent),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
