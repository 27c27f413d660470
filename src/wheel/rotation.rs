use rand::Rng;
use serde::{Deserialize, Serialize};

/// One full turn, in degrees.
const FULL_TURN: f64 = 360.0;

/// Cosmetic minimum travel: four full turns before the wheel can settle.
/// Whole turns cancel under the modulus, so this never biases the outcome.
const MIN_ROTATION: f64 = 4.0 * FULL_TURN;

/// Where the pointer sits, in wheel coordinates. The pointer is drawn at the
/// 3 o'clock mark, which is 0°: slice 0 starts under it. Must stay constant;
/// changing it relabels every slice.
const REFERENCE_OFFSET: f64 = 0.0;

/// Total rotation travel of one spin, in non-negative degrees.
///
/// Which slice ends up under the pointer is a pure function of this value
/// and the participant count, so a stored rotation always replays to the
/// same winner.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation(f64);

impl Rotation {
    /// Sample a spin whose resting position is uniform over one turn.
    pub fn sample(mut rng: impl Rng) -> Self {
        Self(rng.gen::<f64>() * FULL_TURN + MIN_ROTATION)
    }

    /// A rotation from raw degrees. Negative input is clamped to zero; the
    /// wheel only ever turns forward.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.max(0.0))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The resting angle within a single turn.
    pub fn normalized(self) -> f64 {
        self.0 % FULL_TURN
    }

    /// Decode which slice stopped under the pointer.
    ///
    /// Each of the `participant_count` slices spans `360 / count` degrees,
    /// assigned in set order from 0°. Returns `None` only for an empty wheel.
    pub fn winner_index(self, participant_count: usize) -> Option<usize> {
        if participant_count == 0 {
            return None;
        }
        let pointer_angle = (FULL_TURN - self.normalized() + REFERENCE_OFFSET) % FULL_TURN;
        let slice = FULL_TURN / participant_count as f64;
        let index = (pointer_angle / slice).floor() as usize;
        // Guard the floating-point edge at exactly one full turn.
        Some(index.min(participant_count - 1))
    }
}
