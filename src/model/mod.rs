//! Domain model, matching the backend API's camelCase JSON contract.

mod group;
mod id;
mod member;
mod notification;
mod winner;

pub use group::{Group, GroupStatus, Payment, PaymentStatus, WinnerEntry};
pub use id::Id;
pub use member::{Member, MemberRole};
pub use notification::{Notification, NotificationKind};
pub use winner::WinnerRecord;
