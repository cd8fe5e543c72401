//! Actors and the closed role set used for permission checks.

use super::{ActorId, ParseRoleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed role set held by facility staff.
///
/// Exactly one role per actor, read from the caller's session at operation
/// time. Keeping the set closed lets permission checks be exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Operations management: may assign, start, and close any issue.
    OperationsManagement,
    /// Technicians: may assign; may start or close only issues assigned to
    /// them.
    Technicians,
    /// Housekeeping staff.
    Housekeeping,
    /// Security staff.
    Security,
    /// Engineering staff.
    Engineering,
    /// Food service staff.
    FoodService,
    /// Front office staff.
    FrontOffice,
    /// Grounds staff.
    Grounds,
    /// IT staff.
    It,
    /// Finance staff.
    Finance,
    /// Human resources staff.
    HumanResources,
    /// Administration staff.
    Administration,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OperationsManagement => "operations_management",
            Self::Technicians => "technicians",
            Self::Housekeeping => "housekeeping",
            Self::Security => "security",
            Self::Engineering => "engineering",
            Self::FoodService => "food_service",
            Self::FrontOffice => "front_office",
            Self::Grounds => "grounds",
            Self::It => "it",
            Self::Finance => "finance",
            Self::HumanResources => "human_resources",
            Self::Administration => "administration",
        }
    }

    /// Whether the role may change issue assignees.
    #[must_use]
    pub const fn may_assign(self) -> bool {
        matches!(self, Self::OperationsManagement | Self::Technicians)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "operations_management" => Ok(Self::OperationsManagement),
            "technicians" => Ok(Self::Technicians),
            "housekeeping" => Ok(Self::Housekeeping),
            "security" => Ok(Self::Security),
            "engineering" => Ok(Self::Engineering),
            "food_service" => Ok(Self::FoodService),
            "front_office" => Ok(Self::FrontOffice),
            "grounds" => Ok(Self::Grounds),
            "it" => Ok(Self::It),
            "finance" => Ok(Self::Finance),
            "human_resources" => Ok(Self::HumanResources),
            "administration" => Ok(Self::Administration),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated party performing a lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    role: Role,
}

impl Actor {
    /// Creates an actor from a session identity.
    #[must_use]
    pub const fn new(id: ActorId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the actor identifier.
    #[must_use]
    pub const fn id(&self) -> &ActorId {
        &self.id
    }

    /// Returns the role held at call time.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
