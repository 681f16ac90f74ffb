//! Application state and input handling.
//!
//! `App` is the single owner of all mutable state: the search query, the
//! chat draft, the active tab and the chat history. The player and game
//! lists are seeded once and never mutated. Derived views (filtered lists,
//! home stats) are computed on demand; the datasets are tiny.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::data::{sample_chat, sample_games, sample_players};
use crate::export::{write_export, ExportDocument};
use crate::models::{ChatMessage, Game, Player};

/// Author name attached to locally sent chat messages.
pub const LOCAL_USER: &str = "You";

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Players,
    Search,
    Chat,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Players, Tab::Search, Tab::Chat];

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Players => "Players",
            Tab::Search => "Search",
            Tab::Chat => "Chat",
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Players => 1,
            Tab::Search => 2,
            Tab::Chat => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Whether printable keys on this tab edit a text field.
    pub fn accepts_text(self) -> bool {
        matches!(self, Tab::Search | Tab::Chat)
    }
}

/// Counts shown on the home tab, derived from the seeded lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStats {
    pub players_online: usize,
    pub active_games: usize,
    pub total_tracked: usize,
}

/// Top-level application state.
pub struct App {
    /// Seeded player list, never mutated after startup.
    pub players: Vec<Player>,
    /// Seeded game list, never mutated after startup.
    pub games: Vec<Game>,
    /// Chat history, newest-first. Grows only via `send_message`.
    pub chat_messages: Vec<ChatMessage>,

    /// Current search query; empty means "not searching".
    pub search_query: String,
    /// Chat input draft.
    pub chat_draft: String,
    /// Which panel is rendered.
    pub active_tab: Tab,

    /// Transient status line (e.g. export confirmation).
    pub notice: Option<String>,
    /// Directory export files are written into.
    pub export_dir: PathBuf,
    /// Set when the user asks to quit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            players: sample_players(),
            games: sample_games(),
            chat_messages: sample_chat(),
            search_query: String::new(),
            chat_draft: String::new(),
            active_tab: Tab::Home,
            notice: None,
            export_dir: PathBuf::from("."),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Players whose username contains the query, case-insensitively.
    pub fn filtered_players(&self) -> Vec<&Player> {
        let query = self.search_query.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.username.to_lowercase().contains(&query))
            .collect()
    }

    /// Games whose name contains the query, case-insensitively.
    pub fn filtered_games(&self) -> Vec<&Game> {
        let query = self.search_query.to_lowercase();
        self.games
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Whether the search panel is in its "start typing" placeholder state.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Counters for the home tab.
    pub fn home_stats(&self) -> HomeStats {
        HomeStats {
            players_online: self.players.iter().filter(|p| p.is_online()).count(),
            active_games: self.games.iter().filter(|g| g.players > 0).count(),
            total_tracked: self.players.len(),
        }
    }

    /// Games sorted by active player count, busiest first.
    pub fn popular_games(&self) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games.iter().collect();
        games.sort_by(|a, b| b.players.cmp(&a.players));
        games
    }

    // ------------------------------------------------------------------
    // State transitions
    // ------------------------------------------------------------------

    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "tab switched");
            self.active_tab = tab;
        }
    }

    /// Send the current chat draft.
    ///
    /// A draft that trims to empty is a no-op; the draft is kept as-is so
    /// the user does not lose whitespace they are still editing around.
    pub fn send_message(&mut self) {
        if self.chat_draft.trim().is_empty() {
            return;
        }
        let message = ChatMessage::new(
            (self.chat_messages.len() + 1).to_string(),
            LOCAL_USER.to_string(),
            std::mem::take(&mut self.chat_draft),
            "Just now".to_string(),
        );
        tracing::debug!(id = %message.id, "chat message sent");
        self.chat_messages.insert(0, message);
    }

    /// Export the tracked data to a JSON file, surfacing the result in the
    /// notice line. Export never depends on the active tab or search state.
    pub fn export_data(&mut self) {
        let doc = ExportDocument::new(&self.players, &self.games);
        match write_export(&self.export_dir, &doc) {
            Ok(path) => {
                self.notice = Some(format!("Exported to {}", path.display()));
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                self.notice = Some(format!("Export failed: {}", err));
            }
        }
    }

    /// Clear the text field belonging to the active tab.
    fn clear_active_input(&mut self) {
        match self.active_tab {
            Tab::Search => self.search_query.clear(),
            Tab::Chat => self.chat_draft.clear(),
            Tab::Home | Tab::Players => {}
        }
    }

    /// Push a printable character into the active tab's text field.
    fn insert_char(&mut self, c: char) {
        match self.active_tab {
            Tab::Search => self.search_query.push(c),
            Tab::Chat => self.chat_draft.push(c),
            Tab::Home | Tab::Players => {}
        }
    }

    fn backspace(&mut self) {
        match self.active_tab {
            Tab::Search => {
                self.search_query.pop();
            }
            Tab::Chat => {
                self.chat_draft.pop();
            }
            Tab::Home | Tab::Players => {}
        }
    }

    // ------------------------------------------------------------------
    // Input handling
    // ------------------------------------------------------------------

    /// Handle one key event. Only press events mutate state; repeats and
    /// releases (Kitty protocol terminals emit them) are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Any keypress retires the previous notice.
        self.notice = None;

        // Global bindings first, so they work mid-typing. Unbound Ctrl
        // chords are swallowed rather than typed into a text field.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('e') => self.export_data(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.set_active_tab(self.active_tab.next()),
            KeyCode::BackTab => self.set_active_tab(self.active_tab.prev()),
            KeyCode::Esc => self.clear_active_input(),
            KeyCode::Enter if self.active_tab == Tab::Chat => self.send_message(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if self.active_tab.accepts_text() => self.insert_char(c),
            // Shortcuts available only while no text field is active.
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.set_active_tab(Tab::Home),
            KeyCode::Char('2') => self.set_active_tab(Tab::Players),
            KeyCode::Char('3') => self.set_active_tab(Tab::Search),
            KeyCode::Char('4') => self.set_active_tab(Tab::Chat),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
