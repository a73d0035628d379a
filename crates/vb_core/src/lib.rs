//! # vb_core - Volleyball Rotation Model
//!
//! Maps a six-slot roster onto the six fixed court positions for a given
//! rotation and flags the server.
//!
//! ## Features
//! - Validated `Slot` / `RotationIndex` / `CourtPosition` types (1..=6)
//! - Pure rotation mapping: same inputs, same court
//! - Constant court layout table for renderers
//! - JSON API for string-boundary hosts

pub mod api;
pub mod court;
pub mod error;
pub mod roster;
pub mod rotation;
pub mod view;

pub use api::court_view_json;
pub use court::{CourtPosition, PositionLayout, COURT_LAYOUT, COURT_SIZE};
pub use error::{Result, RotationError};
pub use roster::{Player, Roster, Slot};
pub use rotation::{
    is_serving, occupant_at, occupant_slot, occupant_slot_raw, position_of, RotationIndex,
    RotationStep,
};
pub use view::{court_view, CourtView, PositionView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_through_public_api() {
        let roster = Roster::from_ordered([
            Player::new("Ana", "Setter"),
            Player::new("Bea", "OH1"),
            Player::new("Cam", "MB1"),
            Player::new("Dee", "Opposite"),
            Player::new("Eve", "OH2"),
            Player::new("Fay", "MB2"),
        ]);

        let mut rotation = RotationIndex::START;
        let mut servers = Vec::new();
        for _ in 0..6 {
            let view = court_view(&roster, rotation);
            servers.push(view.server().occupant.name.clone());
            rotation = rotation.clockwise();
        }
        assert_eq!(servers, vec!["Ana", "Bea", "Cam", "Dee", "Eve", "Fay"]);
        assert_eq!(rotation, RotationIndex::START);
    }
}
