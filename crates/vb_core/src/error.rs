use thiserror::Error;

/// Contract violations raised by the rotation model.
///
/// Every variant is an invalid-input error: values are rejected, never
/// clamped or wrapped into range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("{what} must be in 1..=6, got {value}")]
    OutOfRange { what: &'static str, value: i64 },

    #[error("roster is missing slot {0}")]
    MissingSlot(u8),

    #[error("roster slot {0} is assigned more than once")]
    DuplicateSlot(u8),
}

impl RotationError {
    pub(crate) fn out_of_range(what: &'static str, value: impl Into<i64>) -> Self {
        RotationError::OutOfRange {
            what,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;
