//! Playback trace records and rendering.

use serde::Serialize;

use crate::format::format_time;
use crate::overlay::BoundaryAction;
use crate::player::PlayerEvent;

/// State after one time-update was delivered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub tick: u32,
    /// Clip-relative position
    pub outer: f64,
    /// Media position
    pub inner: f64,
    pub paused: bool,
    /// Events observed on the player during this tick
    pub events: Vec<PlayerEvent>,
    /// Boundary actions the overlay took
    pub actions: Vec<BoundaryAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TraceEntry {
    fn details(&self) -> String {
        let mut parts = Vec::new();
        if !self.events.is_empty() {
            let names: Vec<&str> = self.events.iter().map(PlayerEvent::name).collect();
            parts.push(format!("events={}", names.join(",")));
        }
        if !self.actions.is_empty() {
            let names: Vec<&str> = self.actions.iter().map(BoundaryAction::name).collect();
            parts.push(format!("actions={}", names.join(",")));
        }
        if let Some(note) = &self.note {
            parts.push(note.clone());
        }
        parts.join(" ")
    }
}

/// Everything a playback run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaybackTrace {
    pub entries: Vec<TraceEntry>,
    /// How many times the player was rebuilt after a fault
    pub reloads: u32,
}

impl PlaybackTrace {
    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    /// Number of times `event` was observed over the whole run.
    pub fn count_event(&self, event: PlayerEvent) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| entry.events.iter())
            .filter(|seen| **seen == event)
            .count()
    }

    /// Fixed-width table, one line per tick.
    pub fn render_table(&self) -> String {
        let mut lines = vec![table_row("tick", "outer", "inner", "state", "details")];
        for entry in &self.entries {
            lines.push(table_row(
                &entry.tick.to_string(),
                &format_time(entry.outer),
                &format_time(entry.inner),
                if entry.paused { "paused" } else { "play" },
                &entry.details(),
            ));
        }
        lines.join("\n")
    }

    /// One JSON object per tick, newline separated.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error> {
        let lines = self
            .entries
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }
}

fn table_row(tick: &str, outer: &str, inner: &str, state: &str, details: &str) -> String {
    format!(
        "{:>4}  {:<9}  {:<9}  {:<6}  {}",
        tick, outer, inner, state, details
    )
    .trim_end()
    .to_string()
}
