// crates/vb_core/src/court.rs
// Six fixed court positions and their layout descriptors

use serde::{Deserialize, Serialize};

use crate::error::RotationError;

/// Number of positions on one side of the court (and slots in a roster).
pub const COURT_SIZE: u8 = 6;

/// Fixed court positions, numbered the way referees number them:
/// 1 is the service position (right back), then counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CourtPosition {
    RightBack = 1,
    RightFront = 2,
    MiddleFront = 3,
    LeftFront = 4,
    LeftBack = 5,
    MiddleBack = 6,
}

impl CourtPosition {
    /// All positions in id order.
    pub const ALL: [CourtPosition; 6] = [
        Self::RightBack,
        Self::RightFront,
        Self::MiddleFront,
        Self::LeftFront,
        Self::LeftBack,
        Self::MiddleBack,
    ];

    /// Position id (1..=6).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn is_front_row(self) -> bool {
        matches!(self, Self::RightFront | Self::MiddleFront | Self::LeftFront)
    }

    pub fn label(self) -> &'static str {
        self.layout().label
    }

    /// Layout descriptor for this position.
    pub fn layout(self) -> &'static PositionLayout {
        // COURT_LAYOUT is ordered by id
        &COURT_LAYOUT[(self.number() - 1) as usize]
    }
}

impl TryFrom<u8> for CourtPosition {
    type Error = RotationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::RightBack),
            2 => Ok(Self::RightFront),
            3 => Ok(Self::MiddleFront),
            4 => Ok(Self::LeftFront),
            5 => Ok(Self::LeftBack),
            6 => Ok(Self::MiddleBack),
            other => Err(RotationError::out_of_range("court position", other)),
        }
    }
}

impl From<CourtPosition> for u8 {
    fn from(position: CourtPosition) -> Self {
        position.number()
    }
}

impl std::fmt::Display for CourtPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// Static layout descriptor: where a position is drawn and what it is called.
///
/// Coordinates are on a 0..=100 half court, net at `y = 0`, viewed from
/// behind the team's own end line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionLayout {
    pub position: CourtPosition,
    pub x: f32,
    pub y: f32,
    pub label: &'static str,
}

/// Court layout table, one row per position in id order.
pub const COURT_LAYOUT: [PositionLayout; 6] = [
    PositionLayout {
        position: CourtPosition::RightBack,
        x: 80.0,
        y: 75.0,
        label: "Right Back",
    },
    PositionLayout {
        position: CourtPosition::RightFront,
        x: 80.0,
        y: 25.0,
        label: "Right Front",
    },
    PositionLayout {
        position: CourtPosition::MiddleFront,
        x: 50.0,
        y: 25.0,
        label: "Middle Front",
    },
    PositionLayout {
        position: CourtPosition::LeftFront,
        x: 20.0,
        y: 25.0,
        label: "Left Front",
    },
    PositionLayout {
        position: CourtPosition::LeftBack,
        x: 20.0,
        y: 75.0,
        label: "Left Back",
    },
    PositionLayout {
        position: CourtPosition::MiddleBack,
        x: 50.0,
        y: 75.0,
        label: "Middle Back",
    },
];
