//! The spin wheel: roster, rotation sampling, and the draw lifecycle.
//!
//! Selection is a pure function of the sampled rotation and the participant
//! snapshot taken when the wheel is launched; the animation is only a delay
//! between launching and settling, owned by the caller.

mod participant;
mod roster;
mod rotation;
mod spin;

pub use participant::{Participant, ParticipantSet};
pub use roster::Roster;
pub use rotation::Rotation;
pub use spin::{DrawResult, SpinState, SpinWheel, DEFAULT_SPIN_DURATION};
