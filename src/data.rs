//! Seeded sample data for the tracker session.
//!
//! The player and game lists are immutable for the lifetime of the app;
//! the chat history is the starting point of the mutable message list.

use crate::models::{ChatMessage, Game, Player, PlayerStatus};

/// The three tracked sample players.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player {
            id: "1".to_string(),
            username: "Player_X247".to_string(),
            status: PlayerStatus::Online,
            last_seen: "2 minutes ago".to_string(),
            current_game: Some("Brookhaven RP".to_string()),
            playtime: "4h 23m".to_string(),
            account_age: "2y 4m".to_string(),
        },
        Player {
            id: "2".to_string(),
            username: "Shadow_Runner".to_string(),
            status: PlayerStatus::InGame,
            last_seen: "Now".to_string(),
            current_game: Some("Adopt Me!".to_string()),
            playtime: "1h 15m".to_string(),
            account_age: "3y 8m".to_string(),
        },
        Player {
            id: "3".to_string(),
            username: "NoobMaster2024".to_string(),
            status: PlayerStatus::Offline,
            last_seen: "15 minutes ago".to_string(),
            current_game: None,
            playtime: "0h 0m".to_string(),
            account_age: "1y 2m".to_string(),
        },
    ]
}

/// The three tracked sample games.
pub fn sample_games() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            name: "Brookhaven RP".to_string(),
            players: 2,
            last_updated: "2 min ago".to_string(),
        },
        Game {
            id: "2".to_string(),
            name: "Adopt Me!".to_string(),
            players: 1,
            last_updated: "1 min ago".to_string(),
        },
        Game {
            id: "3".to_string(),
            name: "Tower of Hell".to_string(),
            players: 0,
            last_updated: "8 min ago".to_string(),
        },
    ]
}

/// The seeded observer chat history, newest-first.
pub fn sample_chat() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            "1".to_string(),
            "Observer_01".to_string(),
            "Player_X247 just joined Brookhaven...".to_string(),
            "2m ago".to_string(),
        ),
        ChatMessage::new(
            "2".to_string(),
            "Watcher_99".to_string(),
            "This is insane, Shadow_Runner has been playing for hours".to_string(),
            "5m ago".to_string(),
        ),
        ChatMessage::new(
            "3".to_string(),
            "Anonymous".to_string(),
            "Anyone tracking NoobMaster2024?".to_string(),
            "8m ago".to_string(),
        ),
    ]
}
