use serde::{Deserialize, Serialize};

/// Online status of a tracked player.
///
/// Serialized with the kebab-case names used in the export document
/// (`"online"`, `"in-game"`, `"offline"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    Online,
    InGame,
    Offline,
}

impl PlayerStatus {
    /// Display label for the status badge.
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Online => "Online",
            PlayerStatus::InGame => "In-Game",
            PlayerStatus::Offline => "Offline",
        }
    }
}

/// A tracked player. Immutable for the session; seeded once at startup.
///
/// The `last_seen`, `playtime` and `account_age` fields are precomputed
/// display strings (e.g. "2 minutes ago"), stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub username: String,
    pub status: PlayerStatus,
    pub last_seen: String,
    /// Game the player is currently in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_game: Option<String>,
    pub playtime: String,
    pub account_age: String,
}

impl Player {
    /// Whether the player counts towards the "players online" stat.
    pub fn is_online(&self) -> bool {
        self.status != PlayerStatus::Offline
    }
}

/// A tracked game. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    /// Number of tracked players currently in this game.
    pub players: u32,
    pub last_updated: String,
}

/// A message in the observer chat.
///
/// The list is kept newest-first and only ever grows; ids are assigned
/// as `len + 1` at send time, which is unique for a single-user session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub user: String,
    pub message: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(id: String, user: String, message: String, timestamp: String) -> Self {
        Self {
            id,
            user,
            message,
            timestamp,
        }
    }
}
