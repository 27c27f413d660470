//! Winner-selection core for Kuri (rotating savings / chit fund) groups.
//!
//! Each period, every member pays into the pot and one member who has paid
//! and not yet taken a pot is drawn as the winner. The draw is presented as a
//! spinning wheel: this crate owns the eligibility filtering, the operator's
//! roster override, the angle-based uniform draw itself, and the
//! `Idle → Spinning → Resolved` lifecycle around it. Rendering, timers and
//! persistence belong to the embedding application.

pub mod error;
pub mod model;
pub mod store;
pub mod wheel;

pub use error::{Error, Result};
