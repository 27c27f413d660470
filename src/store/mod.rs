//! An explicit, injectable state container standing in for the app's
//! client-side store. Callers hold it by reference and mutate it only
//! through [`AppStore::dispatch`], so the draw engine stays testable
//! without any ambient global state.

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Group, GroupStatus, Id, Notification, WinnerEntry, WinnerRecord};

/// Which groups the home screen is showing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFilter {
    #[default]
    All,
    Active,
    MyGroups,
    Completed,
}

/// Mutations the UI can dispatch against the store.
#[derive(Debug, Clone)]
pub enum Action {
    SetActiveFilter(GroupFilter),
    MarkNotificationRead(Id),
    DeleteNotification(Id),
    AddGroup(Group),
    /// Apply a confirmed draw: record the winner row, flip the member's
    /// `has_won` flag and announce the result.
    RecordWinner(WinnerRecord),
}

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    groups: Vec<Group>,
    notifications: Vec<Notification>,
    active_filter: GroupFilter,
}

impl AppStore {
    pub fn new(groups: Vec<Group>, notifications: Vec<Notification>) -> Self {
        Self {
            groups,
            notifications,
            active_filter: GroupFilter::default(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!("store: {action:?}");
        match action {
            Action::SetActiveFilter(filter) => self.active_filter = filter,
            Action::MarkNotificationRead(id) => {
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
                    notification.is_read = true;
                }
            }
            Action::DeleteNotification(id) => self.notifications.retain(|n| n.id != id),
            Action::AddGroup(group) => self.groups.push(group),
            Action::RecordWinner(record) => self.record_winner(record),
        }
    }

    fn record_winner(&mut self, record: WinnerRecord) {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == record.group_id) else {
            return;
        };
        if let Some(member_id) = &record.winner_member_id {
            group.winners.push(WinnerEntry {
                member_id: member_id.clone(),
                month: record.month,
            });
            if let Some(member) = group.members.iter_mut().find(|m| &m.id == member_id) {
                member.has_won = true;
            }
        }
        let notification = Notification::draw_result(group, &record, Utc::now());
        self.notifications.push(notification);
    }

    pub fn group(&self, id: &Id) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| &g.id == id)
            .ok_or_else(|| Error::NotFound(format!("No group with ID {id}")))
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn active_filter(&self) -> GroupFilter {
        self.active_filter
    }

    /// The groups visible under the active filter, for the given viewer.
    pub fn filtered_groups(&self, user_id: &Id) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| match self.active_filter {
                GroupFilter::All => true,
                GroupFilter::Active => g.status == GroupStatus::Active,
                GroupFilter::MyGroups => &g.admin_id == user_id,
                GroupFilter::Completed => g.status == GroupStatus::Completed,
            })
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}
