//! Six-slot roster
//!
//! Slots are stable identifiers (1..=6) that do not move when the team
//! rotates; only the slot-to-position mapping changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::court::COURT_SIZE;
use crate::error::{Result, RotationError};

/// Roster slot number (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub fn new(value: u8) -> Result<Self> {
        if (1..=COURT_SIZE).contains(&value) {
            Ok(Slot(value))
        } else {
            Err(RotationError::out_of_range("slot", value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All slots in ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=COURT_SIZE).map(Slot)
    }

    /// Caller guarantees `value` is in 1..=6.
    pub(crate) fn from_cyclic(value: u8) -> Self {
        debug_assert!((1..=COURT_SIZE).contains(&value));
        Slot(value)
    }

    fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Slot {
    type Error = RotationError;

    fn try_from(value: u8) -> Result<Self> {
        Slot::new(value)
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player standing in a roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Position label such as "Setter", "OH1", "MB2", "Opposite", "Libero"
    #[serde(default)]
    pub role: String,
}

impl Player {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Exactly six players keyed by slot.
///
/// Serialized as an object keyed `"1"`..`"6"`. Construction fails unless
/// every slot is filled exactly once, so lookups by [`Slot`] never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, Player>", into = "BTreeMap<u8, Player>")]
pub struct Roster {
    players: [Player; 6],
}

impl Roster {
    /// Build from players listed in slot order 1..=6.
    pub fn from_ordered(players: [Player; 6]) -> Self {
        Self { players }
    }

    /// Build from `(slot, player)` pairs in any order.
    ///
    /// # Errors
    ///
    /// * `OutOfRange` if a slot number is not 1..=6
    /// * `DuplicateSlot` if a slot appears twice
    /// * `MissingSlot` for the lowest slot left empty
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Player)>,
    {
        let mut filled: [Option<Player>; 6] = Default::default();
        for (raw_slot, player) in entries {
            let slot = Slot::new(raw_slot)?;
            let entry = &mut filled[slot.index()];
            if entry.is_some() {
                return Err(RotationError::DuplicateSlot(raw_slot));
            }
            *entry = Some(player);
        }

        let mut players = Vec::with_capacity(COURT_SIZE as usize);
        for (i, entry) in filled.into_iter().enumerate() {
            match entry {
                Some(player) => players.push(player),
                None => return Err(RotationError::MissingSlot(i as u8 + 1)),
            }
        }

        let players: [Player; 6] = players
            .try_into()
            .map_err(|_| RotationError::MissingSlot(COURT_SIZE))?;
        Ok(Self { players })
    }

    pub fn get(&self, slot: Slot) -> &Player {
        &self.players[slot.index()]
    }

    /// Players with their slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Player)> {
        Slot::all().zip(self.players.iter())
    }
}

impl TryFrom<BTreeMap<u8, Player>> for Roster {
    type Error = RotationError;

    fn try_from(map: BTreeMap<u8, Player>) -> Result<Self> {
        Roster::from_entries(map)
    }
}

impl From<Roster> for BTreeMap<u8, Player> {
    fn from(roster: Roster) -> Self {
        Slot::all()
            .map(Slot::get)
            .zip(roster.players)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Roster P1..P6 with generic roles, slot N holds "PN".
    pub fn numbered_roster() -> Roster {
        let roles = ["Setter", "OH1", "MB1", "Opposite", "OH2", "MB2"];
        Roster::from_entries(
            (1..=6u8).map(|n| (n, Player::new(format!("P{n}"), roles[(n - 1) as usize]))),
        )
        .unwrap()
    }
}
