pub mod court_json;

pub use court_json::{court_view_json, error_codes, CourtRequest, SCHEMA_VERSION};
