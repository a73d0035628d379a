//! JSON API for court views
//!
//! String-in/string-out entry point for hosts that talk to the core through
//! a serialization boundary (web shells, game-engine bindings).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::rotation::{RotationIndex, RotationStep};
use crate::roster::Roster;
use crate::view::{court_view, PositionView};

/// Request/response schema version
pub const SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_JSON: &str = "E_JSON";
    pub const UNSUPPORTED_SCHEMA: &str = "E_SCHEMA";
    pub const INVALID_ROSTER: &str = "E_ROSTER";
    pub const INVALID_ROTATION: &str = "E_ROTATION";
    pub const INTERNAL: &str = "E_INTERNAL";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct CourtRequest {
    pub schema_version: u8,
    pub roster: serde_json::Value,
    /// Serving slot. Kept raw so non-integers report `E_ROTATION`
    #[serde(default)]
    pub rotation: serde_json::Value,
    /// Optional step applied before resolving the view
    #[serde(default)]
    pub action: Option<RotationStep>,
}

#[derive(Debug, Serialize)]
struct CourtResponse<'a> {
    schema_version: u8,
    rotation: RotationIndex,
    positions: &'a [PositionView<'a>],
}

/// Resolve a court view from a JSON request.
///
/// # Errors
///
/// Returns an error string prefixed with one of [`error_codes`]:
/// malformed JSON, unknown schema version, a roster without all six slots,
/// a missing or non-integer rotation or one outside 1..=6, and `E_INTERNAL`
/// if the response cannot be serialized.
pub fn court_view_json(request_json: &str) -> Result<String, String> {
    let request: CourtRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_JSON, format!("Invalid JSON request: {e}")))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("Unsupported schema version: {}", request.schema_version),
        ));
    }

    let roster: Roster = serde_json::from_value(request.roster).map_err(|e| {
        warn!("rejected roster: {e}");
        err_code(error_codes::INVALID_ROSTER, e)
    })?;

    let rotation = request
        .rotation
        .as_u64()
        .and_then(|r| u8::try_from(r).ok())
        .and_then(|r| RotationIndex::new(r).ok())
        .ok_or_else(|| {
            err_code(
                error_codes::INVALID_ROTATION,
                format!("rotation must be in 1..=6, got {}", request.rotation),
            )
        })?;

    let rotation = match request.action {
        Some(step) => step.apply(rotation),
        None => rotation,
    };

    let view = court_view(&roster, rotation);
    info!(rotation = rotation.get(), "court view resolved");

    let response = CourtResponse {
        schema_version: SCHEMA_VERSION,
        rotation,
        positions: &view.positions,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::INTERNAL, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster_json() -> serde_json::Value {
        json!({
            "1": {"name": "P1", "role": "Setter"},
            "2": {"name": "P2", "role": "OH1"},
            "3": {"name": "P3", "role": "MB1"},
            "4": {"name": "P4", "role": "Opposite"},
            "5": {"name": "P5", "role": "OH2"},
            "6": {"name": "P6", "role": "MB2"}
        })
    }

    fn call(request: serde_json::Value) -> Result<serde_json::Value, String> {
        court_view_json(&request.to_string())
            .map(|s| serde_json::from_str(&s).expect("response is valid JSON"))
    }

    fn names(response: &serde_json::Value) -> Vec<String> {
        response["positions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["occupant"]["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_start_rotation() {
        let response = call(json!({
            "schema_version": 1,
            "roster": roster_json(),
            "rotation": 1
        }))
        .unwrap();

        assert_eq!(response["schema_version"], 1);
        assert_eq!(response["rotation"], 1);
        assert_eq!(names(&response), vec!["P1", "P2", "P3", "P4", "P5", "P6"]);
        assert_eq!(response["positions"][0]["serving"], true);
        assert_eq!(response["positions"][1]["serving"], false);
    }

    #[test]
    fn test_clockwise_action() {
        let response = call(json!({
            "schema_version": 1,
            "roster": roster_json(),
            "rotation": 1,
            "action": "clockwise"
        }))
        .unwrap();

        assert_eq!(response["rotation"], 2);
        assert_eq!(names(&response), vec!["P2", "P3", "P4", "P5", "P6", "P1"]);
        assert_eq!(response["positions"][0]["serving"], true);
    }

    #[test]
    fn test_counter_clockwise_wraps() {
        let response = call(json!({
            "schema_version": 1,
            "roster": roster_json(),
            "rotation": 1,
            "action": "counter_clockwise"
        }))
        .unwrap();
        assert_eq!(response["rotation"], 6);
        assert_eq!(response["positions"][0]["occupant"]["name"], "P6");
    }

    #[test]
    fn test_errors_are_coded() {
        let err = court_view_json("{not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_JSON));

        let err = call(json!({"schema_version": 2, "roster": roster_json(), "rotation": 1}))
            .unwrap_err();
        assert!(err.starts_with(error_codes::UNSUPPORTED_SCHEMA));

        let mut roster = roster_json();
        roster.as_object_mut().unwrap().remove("4");
        let err = call(json!({"schema_version": 1, "roster": roster, "rotation": 1})).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_ROSTER), "{err}");

        for bad in [0, 7, -1, 1000] {
            let err = call(json!({"schema_version": 1, "roster": roster_json(), "rotation": bad}))
                .unwrap_err();
            assert!(err.starts_with(error_codes::INVALID_ROTATION), "{err}");
        }
    }

    #[test]
    fn test_non_integer_rotation_is_a_rotation_error() {
        for bad in [json!(1.5), json!("3"), json!(null), json!([1])] {
            let err = call(json!({"schema_version": 1, "roster": roster_json(), "rotation": bad}))
                .unwrap_err();
            assert!(err.starts_with(error_codes::INVALID_ROTATION), "{err}");
        }

        let err = call(json!({"schema_version": 1, "roster": roster_json()})).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_ROTATION), "{err}");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            error_codes::INVALID_JSON,
            error_codes::UNSUPPORTED_SCHEMA,
            error_codes::INVALID_ROSTER,
            error_codes::INVALID_ROTATION,
            error_codes::INTERNAL,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_same_request_same_response() {
        let request = json!({"schema_version": 1, "roster": roster_json(), "rotation": 4});
        let a = court_view_json(&request.to_string()).unwrap();
        let b = court_view_json(&request.to_string()).unwrap();
        assert_eq!(a, b);
    }
}
