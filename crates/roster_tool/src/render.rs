//! Plain-text output for the CLI

use anyhow::Result;
use rustc_hash::FxHashMap;
use std::fmt::Write;
use vb_core::{CourtView, PositionView};

use crate::config::ToolConfig;
use crate::records::{team_ids, PlayerRecord};

/// One line per team: `team: id, id, ...` in jersey order.
pub fn render_teams(teams: &FxHashMap<String, Vec<PlayerRecord>>) -> String {
    let mut out = String::new();
    for team in team_ids(teams) {
        let ids: Vec<&str> = teams[team].iter().map(|r| r.id.as_str()).collect();
        out.push_str(&format!("{team} ({}): {}\n", ids.len(), ids.join(", ")));
    }
    out
}

fn render_position(entry: &PositionView<'_>, config: &ToolConfig) -> String {
    let mut line = format!(
        "{} {:<width$} slot {} {}",
        entry.position.number(),
        entry.label,
        entry.slot,
        entry.occupant.name,
        width = config.label_width,
    );
    if config.show_roles && !entry.occupant.role.is_empty() {
        line.push_str(&format!(" [{}]", entry.occupant.role));
    }
    if entry.serving {
        line.push(' ');
        line.push_str(&config.serving_marker);
    }
    line
}

/// Court view as text, front row first (4 3 2 over 5 6 1), or JSON when
/// `config.json_output` is set.
pub fn render_court(view: &CourtView<'_>, config: &ToolConfig) -> Result<String> {
    if config.json_output {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    writeln!(out, "Rotation {}", view.rotation.get())?;
    writeln!(out, "-- front row --")?;
    for entry in view.front_row().rev() {
        writeln!(out, "{}", render_position(entry, config))?;
    }
    writeln!(out, "-- back row --")?;
    let back: Vec<&PositionView<'_>> = view.back_row().collect();
    // 5 6 1: left to right as seen from the end line
    for entry in [back[1], back[2], back[0]] {
        writeln!(out, "{}", render_position(entry, config))?;
    }
    Ok(out)
}
