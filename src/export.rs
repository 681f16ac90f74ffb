//! JSON export of the tracked data.
//!
//! Builds the `{ players, games, exportedAt }` document and writes it to a
//! timestamp-suffixed file, the local stand-in for the browser download the
//! web version triggers.

use crate::models::{Game, Player};
use chrono::{DateTime, Utc};
use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix for exported documents.
pub const EXPORT_PREFIX: &str = "roblox-tracker";

/// The exported JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// Snapshot the tracked lists with the current time.
    pub fn new(players: &[Player], games: &[Game]) -> Self {
        Self {
            players: players.to_vec(),
            games: games.to_vec(),
            exported_at: Utc::now(),
        }
    }

    /// Filename for this document: `roblox-tracker-<ms-epoch>.json`.
    pub fn filename(&self) -> String {
        format!("{}-{}.json", EXPORT_PREFIX, self.exported_at.timestamp_millis())
    }
}

/// Write the export document into `dir`, returning the path written.
pub fn write_export(dir: &Path, doc: &ExportDocument) -> Result<PathBuf> {
    let file_path = dir.join(doc.filename());
    let json = serde_json::to_string_pretty(doc).wrap_err("Failed to serialize export data")?;
    fs::write(&file_path, json)
        .wrap_err(format!("Failed to write export to {:?}", file_path))?;
    tracing::info!(
        path = %file_path.display(),
        players = doc.players.len(),
        games = doc.games.len(),
        "exported tracker data"
    );
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_games, sample_players};

    #[test]
    fn test_export_document_snapshots_lists() {
        let players = sample_players();
        let games = sample_games();
        let before = Utc::now();

        let doc = ExportDocument::new(&players, &games);

        assert_eq!(doc.players.len(), 3);
        assert_eq!(doc.games.len(), 3);
        assert!(doc.exported_at >= before);
    }

    #[test]
    fn test_export_filename_pattern() {
        let doc = ExportDocument::new(&sample_players(), &sample_games());
        let name = doc.filename();

        assert!(name.starts_with("roblox-tracker-"));
        assert!(name.ends_with(".json"));
        let digits = &name["roblox-tracker-".len()..name.len() - ".json".len()];
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_export_wire_format() {
        let doc = ExportDocument::new(&sample_players(), &sample_games());
        let json = serde_json::to_value(&doc).expect("Failed to serialize");

        assert_eq!(json["players"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["games"].as_array().map(Vec::len), Some(3));
        // exportedAt must parse back as an RFC 3339 timestamp
        let exported_at = json["exportedAt"].as_str().expect("exportedAt missing");
        DateTime::parse_from_rfc3339(exported_at).expect("exportedAt not ISO-8601");
    }

    #[test]
    fn test_write_export_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let doc = ExportDocument::new(&sample_players(), &sample_games());

        let path = write_export(dir.path(), &doc).expect("Failed to write export");

        assert!(path.exists());
        let json = std::fs::read_to_string(&path).expect("Failed to read export");
        let back: ExportDocument = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, doc);
    }
}
