//! Resolved court view for a presentation layer
//!
//! One entry per court position, in layout-table order, carrying the layout
//! descriptor, the slot and player standing there, and the serving flag.

use serde::Serialize;
use tracing::debug;

use crate::court::{CourtPosition, COURT_LAYOUT};
use crate::rotation::{is_serving, occupant_slot, RotationIndex};
use crate::roster::{Player, Roster, Slot};

/// A single court position with its occupant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView<'a> {
    #[serde(rename = "id")]
    pub position: CourtPosition,
    pub x: f32,
    pub y: f32,
    pub label: &'static str,
    pub slot: Slot,
    pub occupant: &'a Player,
    pub serving: bool,
}

/// All six positions for one rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtView<'a> {
    pub rotation: RotationIndex,
    pub positions: [PositionView<'a>; 6],
}

impl<'a> CourtView<'a> {
    pub fn at(&self, position: CourtPosition) -> &PositionView<'a> {
        &self.positions[(position.number() - 1) as usize]
    }

    /// The serving entry. Always position 1.
    pub fn server(&self) -> &PositionView<'a> {
        self.at(CourtPosition::RightBack)
    }

    pub fn front_row(&self) -> impl DoubleEndedIterator<Item = &PositionView<'a>> {
        self.positions.iter().filter(|p| p.position.is_front_row())
    }

    pub fn back_row(&self) -> impl DoubleEndedIterator<Item = &PositionView<'a>> {
        self.positions.iter().filter(|p| !p.position.is_front_row())
    }
}

/// Resolve every court position for `rotation`.
pub fn court_view(roster: &Roster, rotation: RotationIndex) -> CourtView<'_> {
    let positions = COURT_LAYOUT.map(|layout| {
        let slot = occupant_slot(layout.position, rotation);
        PositionView {
            position: layout.position,
            x: layout.x,
            y: layout.y,
            label: layout.label,
            slot,
            occupant: roster.get(slot),
            serving: is_serving(layout.position, rotation),
        }
    });

    debug!(
        rotation = rotation.get(),
        server = %positions[0].occupant.name,
        "resolved court view"
    );

    CourtView {
        rotation,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::test_support::numbered_roster;

    #[test]
    fn test_view_follows_layout_table() {
        let roster = numbered_roster();
        let view = court_view(&roster, RotationIndex::START);
        for (entry, layout) in view.positions.iter().zip(COURT_LAYOUT.iter()) {
            assert_eq!(entry.position, layout.position);
            assert_eq!(entry.x, layout.x);
            assert_eq!(entry.y, layout.y);
            assert_eq!(entry.label, layout.label);
        }
    }

    #[test]
    fn test_view_after_rotation() {
        let roster = numbered_roster();
        let view = court_view(&roster, RotationIndex::START.clockwise());

        assert_eq!(view.server().occupant.name, "P2");
        assert!(view.server().serving);
        assert_eq!(view.at(CourtPosition::MiddleBack).occupant.name, "P1");
        assert_eq!(view.positions.iter().filter(|p| p.serving).count(), 1);

        let front: Vec<&str> = view.front_row().map(|p| p.occupant.name.as_str()).collect();
        assert_eq!(front, vec!["P3", "P4", "P5"]);
        assert_eq!(view.back_row().count(), 3);
    }

    #[test]
    fn test_view_is_idempotent() {
        let roster = numbered_roster();
        for r in RotationIndex::all() {
            assert_eq!(court_view(&roster, r), court_view(&roster, r));
        }
    }

    #[test]
    fn test_view_serializes_for_renderers() {
        let roster = numbered_roster();
        let json = serde_json::to_value(court_view(&roster, RotationIndex::START)).unwrap();
        assert_eq!(json["rotation"], 1);
        assert_eq!(json["positions"][0]["id"], 1);
        assert_eq!(json["positions"][0]["label"], "Right Back");
        assert_eq!(json["positions"][0]["serving"], true);
        assert_eq!(json["positions"][3]["occupant"]["name"], "P4");
        assert_eq!(json["positions"][5]["slot"], 6);
    }
}
