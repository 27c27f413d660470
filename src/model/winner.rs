use serde::{Deserialize, Serialize};

use super::Id;

/// The confirmation payload handed to the backend when a draw is accepted.
///
/// `winner_member_id` is present when the winner came from real membership;
/// manually-added names carry only `winner_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    pub group_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_member_id: Option<Id>,
    pub winner_name: String,
    /// 1-based period index.
    pub month: u32,
}
