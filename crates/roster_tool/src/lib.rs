//! Roster Tool Library
//!
//! Spreadsheet export (CSV) → player records → per-team listing
//! Team records → six-slot `Roster` → court view text

pub mod config;
pub mod records;
pub mod render;

pub use config::ToolConfig;
pub use records::{
    load_player_records, partition_by_team, read_player_records, roster_for_team, team_ids,
    ParseStats, PlayerRecord,
};
pub use render::{render_court, render_teams};

use anyhow::Result;
use std::path::Path;
use vb_core::{court_view, RotationIndex};

/// Load `csv_path`, build `team`'s starting six and render the court for
/// `rotation`.
pub fn court_report(
    csv_path: &Path,
    team: &str,
    rotation: RotationIndex,
    config: &ToolConfig,
) -> Result<String> {
    let (records, _) = load_player_records(csv_path)?;
    let roster = roster_for_team(&records, team)?;
    render_court(&court_view(&roster, rotation), config)
}

/// Load `csv_path` and list every team's player ids.
pub fn teams_report(csv_path: &Path) -> Result<(String, ParseStats)> {
    let (records, stats) = load_player_records(csv_path)?;
    Ok((render_teams(&partition_by_team(&records)), stats))
}
