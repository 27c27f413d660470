use serde::{Deserialize, Serialize};

use super::Id;

/// A group member as delivered by the membership service.
///
/// The `has_paid` / `has_won` flags are authoritative inputs to the draw;
/// they arrive resolved from the backend, or can be derived from raw payment
/// and winner rows via [`Group::resolve_member_flags`](super::Group::resolve_member_flags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Id,
    pub name: String,
    /// Paid their contribution for the current period.
    pub has_paid: bool,
    /// Already taken a pot in a previous period.
    pub has_won: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    /// Placeholder member added by the organiser without a real account.
    #[serde(default)]
    pub is_dummy: bool,
}

impl Member {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            has_paid: false,
            has_won: false,
            role: None,
            is_dummy: false,
        }
    }

    /// May this member be drawn this period?
    pub fn is_eligible(&self) -> bool {
        self.has_paid && !self.has_won
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}
