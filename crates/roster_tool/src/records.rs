//! Player records from a spreadsheet export
//!
//! The team spreadsheet is exported as CSV with a header row:
//!
//! ```text
//! id,number,name,team,role,slot
//! p-01,7,Ana Souza,blue,Setter,1
//! p-02,11,Bea Lind,blue,OH1,2
//! p-17,3,Kim Park,red,,
//! ```
//!
//! `role` and `slot` may be empty. Rows are matched by header name, so
//! column order does not matter and extra columns are ignored.

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use vb_core::{Player, Roster};

/// One row of the roster spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    /// Jersey number
    pub number: u8,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Starting slot (1..=6) for players in the starting six
    #[serde(default)]
    pub slot: Option<u8>,
}

impl PlayerRecord {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.role.clone().unwrap_or_default())
    }
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

/// Read every player record from a CSV export.
///
/// Rows that do not deserialize (bad jersey number, missing name, ...) are
/// logged, counted in [`ParseStats::failed`] and skipped.
pub fn load_player_records(csv_path: &Path) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    read_player_records(reader)
}

/// Same as [`load_player_records`] for an already opened reader.
pub fn read_player_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for (row, result) in reader.deserialize::<PlayerRecord>().enumerate() {
        stats.total_rows += 1;
        match result {
            Ok(record) => {
                stats.parsed += 1;
                records.push(record);
            }
            Err(e) => {
                stats.failed += 1;
                // +2: header row and 1-based numbering
                warn!(row = row + 2, "skipping player row: {e}");
            }
        }
    }

    debug!(
        total = stats.total_rows,
        parsed = stats.parsed,
        failed = stats.failed,
        "player records loaded"
    );
    Ok((records, stats))
}

/// Group records by team id. Each team's players are ordered by jersey number.
pub fn partition_by_team(records: &[PlayerRecord]) -> FxHashMap<String, Vec<PlayerRecord>> {
    let mut teams: FxHashMap<String, Vec<PlayerRecord>> = FxHashMap::default();
    for record in records {
        teams
            .entry(record.team.clone())
            .or_default()
            .push(record.clone());
    }
    for players in teams.values_mut() {
        players.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
    }
    teams
}

/// Team ids in sorted order, for stable output.
pub fn team_ids(teams: &FxHashMap<String, Vec<PlayerRecord>>) -> Vec<&str> {
    let mut ids: Vec<&str> = teams.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

/// Build the starting six of `team` from the records that carry a slot.
///
/// Fails when the team is unknown or its slotted players do not fill
/// slots 1..=6 exactly once.
pub fn roster_for_team(records: &[PlayerRecord], team: &str) -> Result<Roster> {
    let team_records: Vec<&PlayerRecord> = records.iter().filter(|r| r.team == team).collect();
    if team_records.is_empty() {
        bail!("No players found for team '{team}'");
    }

    let entries = team_records
        .iter()
        .filter_map(|r| r.slot.map(|slot| (slot, r.to_player())));

    Roster::from_entries(entries)
        .with_context(|| format!("Team '{team}' does not have a valid starting six"))
}
