//! Rotation state and the rotation-to-court-position mapping
//!
//! `RotationIndex` names the slot that is currently serving. The mapping is
//! a cyclic offset: slot `r` stands at position 1 and every other slot
//! follows in rotation order, so advancing the index moves each player one
//! position clockwise (position 2 rotates into the service position).
//!
//! The index is a plain `Copy` value owned by the caller. Nothing here keeps
//! state between calls.

use serde::{Deserialize, Serialize};

use crate::court::{CourtPosition, COURT_SIZE};
use crate::error::{Result, RotationError};
use crate::roster::{Player, Roster, Slot};

/// Slot currently in the service position (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RotationIndex(u8);

impl Default for RotationIndex {
    fn default() -> Self {
        Self::START
    }
}

impl RotationIndex {
    /// Rotation at the start of a set: slot 1 serves.
    pub const START: RotationIndex = RotationIndex(1);

    pub fn new(value: u8) -> Result<Self> {
        if (1..=COURT_SIZE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RotationError::out_of_range("rotation index", value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The serving slot.
    pub fn server(self) -> Slot {
        Slot::from_cyclic(self.0)
    }

    /// Advance one rotation (side-out won): 6 wraps to 1.
    pub fn clockwise(self) -> Self {
        if self.0 == COURT_SIZE {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Undo one rotation: 1 wraps to 6.
    pub fn counter_clockwise(self) -> Self {
        if self.0 == 1 {
            Self(COURT_SIZE)
        } else {
            Self(self.0 - 1)
        }
    }

    /// All six rotations starting from `START`.
    pub fn all() -> impl Iterator<Item = RotationIndex> {
        (1..=COURT_SIZE).map(RotationIndex)
    }
}

impl TryFrom<u8> for RotationIndex {
    type Error = RotationError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RotationIndex> for u8 {
    fn from(index: RotationIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for RotationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Single rotation step requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationStep {
    Clockwise,
    CounterClockwise,
}

impl RotationStep {
    pub fn apply(self, index: RotationIndex) -> RotationIndex {
        match self {
            Self::Clockwise => index.clockwise(),
            Self::CounterClockwise => index.counter_clockwise(),
        }
    }
}

/// Slot standing at `position` in rotation `rotation`.
pub fn occupant_slot(position: CourtPosition, rotation: RotationIndex) -> Slot {
    let p = position.number();
    let r = rotation.get();
    // p, r in 1..=6 so the sum never underflows
    Slot::from_cyclic((p + r - 2) % COURT_SIZE + 1)
}

/// Player standing at `position` in rotation `rotation`.
pub fn occupant_at(roster: &Roster, position: CourtPosition, rotation: RotationIndex) -> &Player {
    roster.get(occupant_slot(position, rotation))
}

/// Whether the player at `position` is the server for `rotation`.
pub fn is_serving(position: CourtPosition, rotation: RotationIndex) -> bool {
    occupant_slot(position, rotation) == rotation.server()
}

/// Court position where `slot` stands in rotation `rotation`.
///
/// Inverse of [`occupant_slot`] for a fixed rotation.
pub fn position_of(slot: Slot, rotation: RotationIndex) -> CourtPosition {
    let s = slot.get();
    let r = rotation.get();
    let number = (s + COURT_SIZE - r) % COURT_SIZE + 1;
    CourtPosition::ALL[(number - 1) as usize]
}

/// Raw-integer form of [`occupant_slot`] for callers holding unchecked input.
///
/// # Errors
///
/// `OutOfRange` when either argument is outside 1..=6. Values are never
/// wrapped into range.
pub fn occupant_slot_raw(position: i64, rotation: i64) -> Result<u8> {
    let position = u8::try_from(position)
        .map_err(|_| RotationError::out_of_range("court position", position))
        .and_then(CourtPosition::try_from)?;
    let rotation = u8::try_from(rotation)
        .map_err(|_| RotationError::out_of_range("rotation index", rotation))
        .and_then(RotationIndex::new)?;
    Ok(occupant_slot(position, rotation).get())
}
