use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{Id, Member};

/// A Kuri group: the people paying into a shared pot, one of whom is drawn
/// as the winner each period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Per-member contribution for one period, in whole rupees.
    pub monthly_amount: u64,
    pub status: GroupStatus,
    pub admin_id: Id,
    pub members: Vec<Member>,
    /// Raw per-month payment rows, as the details API returns them.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Raw winner rows, one per already-drawn month.
    #[serde(default)]
    pub winners: Vec<WinnerEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl Group {
    /// Create a new group with validated metadata.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        monthly_amount: u64,
        admin_id: impl Into<Id>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::BadRequest("Group name must not be empty".to_string()));
        }
        if monthly_amount == 0 {
            return Err(Error::BadRequest(
                "Monthly amount must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            id: id.into(),
            name,
            description: String::new(),
            monthly_amount,
            status: GroupStatus::Pending,
            admin_id: admin_id.into(),
            members: Vec::new(),
            payments: Vec::new(),
            winners: Vec::new(),
            start_date: None,
        })
    }

    /// Total pot handed to the winner: one contribution per member.
    pub fn prize_pool(&self) -> u64 {
        self.monthly_amount * self.members.len() as u64
    }

    pub fn member(&self, id: &Id) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Has this member ever taken the pot?
    pub fn has_won(&self, member_id: &Id) -> bool {
        self.winners.iter().any(|w| &w.member_id == member_id)
    }

    /// Has this member a `paid` row for the given month?
    pub fn has_paid(&self, member_id: &Id, month: u32) -> bool {
        self.payments.iter().any(|p| {
            &p.member_id == member_id && p.month == month && p.status == PaymentStatus::Paid
        })
    }

    /// Derive every member's `has_paid` / `has_won` flags from the raw
    /// payment and winner rows for the given month. The details API delivers
    /// rows, not flags, so this runs once when a group is loaded.
    pub fn resolve_member_flags(&mut self, month: u32) {
        let payments = std::mem::take(&mut self.payments);
        let winners = std::mem::take(&mut self.winners);
        for member in &mut self.members {
            member.has_paid = payments.iter().any(|p| {
                p.member_id == member.id && p.month == month && p.status == PaymentStatus::Paid
            });
            member.has_won = winners.iter().any(|w| w.member_id == member.id);
        }
        self.payments = payments;
        self.winners = winners;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Active,
    Pending,
    Completed,
}

/// One member's payment state for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub member_id: Id,
    /// 1-based period index.
    pub month: u32,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// The recorded winner of one month's draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerEntry {
    pub member_id: Id,
    pub month: u32,
}
