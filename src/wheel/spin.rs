use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{Group, Id, WinnerRecord};

use super::{Participant, ParticipantSet, Roster, Rotation};

/// Nominal animation time between launching the wheel and settling on a
/// winner. Purely cosmetic; the engine never waits on it itself.
pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(3000);

/// The outcome of one draw. Immutable; a re-spin supersedes it with a fresh
/// result rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub winner: Participant,
    pub rotation: Rotation,
}

/// Lifecycle of the wheel: `Idle → Spinning → Resolved → Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    /// The wheel is turning. The snapshot taken at launch decides the
    /// outcome; roster edits made mid-spin cannot reach it.
    Spinning {
        rotation: Rotation,
        snapshot: ParticipantSet,
    },
    Resolved(DrawResult),
}

/// One spin-wheel session for a group and month: roster management, the
/// spin lifecycle, and hand-off of the confirmed winner.
///
/// The caller owns the animation timer: it calls [`spin`](Self::spin), waits
/// [`duration`](Self::duration), then calls [`settle`](Self::settle).
/// Settling is deterministic in the sampled rotation and the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinWheel {
    group_id: Id,
    /// 1-based period index being drawn.
    month: u32,
    roster: Roster,
    state: SpinState,
    duration: Duration,
}

impl SpinWheel {
    /// A session rostered from the group's draw-eligible members.
    pub fn new(group: &Group, month: u32) -> Self {
        Self {
            group_id: group.id.clone(),
            month,
            roster: Roster::from_members(&group.members),
            state: SpinState::Idle,
            duration: DEFAULT_SPIN_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Roster edits are allowed at any time, including mid-spin; an
    /// in-flight spin keeps drawing from its launch snapshot.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning { .. })
    }

    pub fn result(&self) -> Option<&DrawResult> {
        match &self.state {
            SpinState::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Launch a spin. Rejected with `false`, leaving all state untouched,
    /// when the wheel is already turning or there is nothing on it.
    pub fn spin(&mut self, rng: impl Rng) -> bool {
        if self.is_spinning() {
            return false;
        }
        let snapshot: ParticipantSet = self.roster.active().to_vec().into();
        if snapshot.is_empty() {
            return false;
        }
        let rotation = Rotation::sample(rng);
        debug!(
            "group {}: wheel launched, {:.1}° across {} names",
            self.group_id,
            rotation.degrees(),
            snapshot.len()
        );
        self.state = SpinState::Spinning { rotation, snapshot };
        true
    }

    /// Settle the wheel once the caller's animation timer has fired.
    /// No-op unless a spin is in flight.
    pub fn settle(&mut self) -> Option<&DrawResult> {
        let (rotation, winner) = match &self.state {
            SpinState::Spinning { rotation, snapshot } => {
                // Snapshot is non-empty by the launch guard.
                let index = rotation.winner_index(snapshot.len())?;
                (*rotation, snapshot.get(index)?.clone())
            }
            _ => return None,
        };
        info!("group {}: wheel settled on {}", self.group_id, winner.name);
        self.state = SpinState::Resolved(DrawResult { winner, rotation });
        self.result()
    }

    /// Discard the result and return to idle for another spin.
    /// No-op unless resolved.
    pub fn spin_again(&mut self) -> bool {
        if matches!(self.state, SpinState::Resolved(_)) {
            self.state = SpinState::Idle;
            true
        } else {
            false
        }
    }

    /// Accept the result, producing the record handed to the backend for
    /// persistence, and return to idle. No-op unless resolved.
    pub fn confirm(&mut self) -> Option<WinnerRecord> {
        let result = match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Resolved(result) => result,
            other => {
                self.state = other;
                return None;
            }
        };
        info!(
            "group {}: month {} winner confirmed: {}",
            self.group_id, self.month, result.winner.name
        );
        Some(WinnerRecord {
            group_id: self.group_id.clone(),
            winner_member_id: result.winner.id,
            winner_name: result.winner.name,
            month: self.month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logging() {
        log4rs_test_utils::test_logging::init_logging_once_for(["kuri_draw"], None, None);
    }

    fn wheel() -> SpinWheel {
        SpinWheel::new(&Group::example(), 4)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn full_lifecycle_produces_a_confirmable_winner() {
        init_logging();
        let mut wheel = wheel();
        assert_eq!(*wheel.state(), SpinState::Idle);

        assert!(wheel.spin(rng()));
        assert!(wheel.is_spinning());
        assert!(wheel.result().is_none());

        let result = wheel.settle().unwrap().clone();
        // Eligible members of the example group are Asha and Chandra.
        assert!(["Asha", "Chandra"].contains(&result.winner.name.as_str()));
        assert!(result.winner.id.is_some());

        let record = wheel.confirm().unwrap();
        assert_eq!(record.group_id, "g1".into());
        assert_eq!(record.winner_name, result.winner.name);
        assert_eq!(record.winner_member_id, result.winner.id);
        assert_eq!(record.month, 4);
        assert_eq!(*wheel.state(), SpinState::Idle);
    }

    #[test]
    fn empty_roster_rejects_the_spin() {
        let group = Group {
            members: vec![Member::example_unpaid("m1", "Asha")],
            ..Group::example()
        };
        let mut wheel = SpinWheel::new(&group, 1);
        assert!(!wheel.spin(rng()));
        assert_eq!(*wheel.state(), SpinState::Idle);
        assert!(wheel.settle().is_none());
    }

    #[test]
    fn concurrent_spin_is_rejected() {
        let mut wheel = wheel();
        assert!(wheel.spin(rng()));
        let in_flight = wheel.state().clone();
        assert!(!wheel.spin(rng()));
        // The rejected request changed nothing, not even the rotation.
        assert_eq!(*wheel.state(), in_flight);
    }

    #[test]
    fn mid_spin_roster_edits_do_not_reach_the_snapshot() {
        let mut wheel = wheel();
        assert!(wheel.spin(rng()));
        wheel.roster_mut().add_custom("Latecomer");
        let result = wheel.settle().unwrap();
        assert_ne!(result.winner.name, "Latecomer");
    }

    #[test]
    fn custom_list_takes_precedence_until_reset() {
        let mut wheel = wheel();
        wheel.roster_mut().add_custom("Guest A");
        wheel.roster_mut().add_custom("Guest B");

        for seed in 0..20 {
            assert!(wheel.spin(StdRng::seed_from_u64(seed)));
            let result = wheel.settle().unwrap();
            assert!(["Guest A", "Guest B"].contains(&result.winner.name.as_str()));
            assert!(result.winner.id.is_none());
            assert!(wheel.spin_again());
        }

        wheel.roster_mut().reset();
        for seed in 0..20 {
            assert!(wheel.spin(StdRng::seed_from_u64(seed)));
            let result = wheel.settle().unwrap();
            assert!(["Asha", "Chandra"].contains(&result.winner.name.as_str()));
            assert!(wheel.spin_again());
        }
    }

    #[test]
    fn spin_again_discards_the_result() {
        let mut wheel = wheel();
        assert!(!wheel.spin_again());
        assert!(wheel.spin(rng()));
        assert!(!wheel.spin_again());
        wheel.settle().unwrap();
        assert!(wheel.spin_again());
        assert!(wheel.result().is_none());
        assert!(wheel.confirm().is_none());
    }

    #[test]
    fn repeat_draws_resample_the_rotation() {
        let mut wheel = wheel();
        let mut rng = StdRng::seed_from_u64(99);

        assert!(wheel.spin(&mut rng));
        let first = match wheel.state() {
            SpinState::Spinning { rotation, .. } => *rotation,
            _ => unreachable!(),
        };
        wheel.settle().unwrap();
        assert!(wheel.spin_again());

        assert!(wheel.spin(&mut rng));
        let second = match wheel.state() {
            SpinState::Spinning { rotation, .. } => *rotation,
            _ => unreachable!(),
        };
        assert_ne!(first, second);
    }

    #[test]
    fn duration_is_injectable() {
        let wheel = wheel().with_duration(Duration::from_millis(100));
        assert_eq!(wheel.duration(), Duration::from_millis(100));
    }
}
