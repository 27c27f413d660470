use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Group, Id, WinnerRecord};

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Id>,
}

impl Notification {
    /// Announce a confirmed draw result to the group.
    pub fn draw_result(group: &Group, record: &WinnerRecord, at: DateTime<Utc>) -> Self {
        Self {
            id: Id::new(format!("draw-{}-{}", group.id, record.month)),
            kind: NotificationKind::DrawResult,
            title: "Draw result".to_string(),
            message: format!(
                "{} won month {} of {} (₹{})",
                record.winner_name,
                record.month,
                group.name,
                group.prize_pool()
            ),
            date: at,
            is_read: false,
            group_id: Some(group.id.clone()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PaymentDue,
    PaymentPaid,
    SpinReminder,
    DrawResult,
    GroupInvite,
    AgreementPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_result_notification_targets_the_group() {
        let group = Group::example();
        let record = WinnerRecord {
            group_id: group.id.clone(),
            winner_member_id: Some("m3".into()),
            winner_name: "Chandra".to_string(),
            month: 4,
        };
        let notification = Notification::draw_result(&group, &record, Utc::now());
        assert_eq!(notification.kind, NotificationKind::DrawResult);
        assert_eq!(notification.group_id, Some(group.id));
        assert!(!notification.is_read);
        assert!(notification.message.contains("Chandra"));
        assert!(notification.message.contains("15000"));
    }

    #[test]
    fn kind_uses_api_wire_names() {
        let json = serde_json::to_value(NotificationKind::SpinReminder).unwrap();
        assert_eq!(json, "spin_reminder");
    }
}
