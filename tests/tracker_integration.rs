//! Tracker Integration Tests
//!
//! These tests drive the app the way the event loop does and verify:
//! - Search filtering across players and games
//! - Chat send flow, including the blank-draft no-op
//! - Export to disk with the seeded sample data
//! - Tab switching rendering exactly one panel at a time

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use roblox_tracker::app::{App, Tab, LOCAL_USER};
use roblox_tracker::export::ExportDocument;
use roblox_tracker::ui;

// ============================================================================
// Test Helpers
// ============================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Render the app into a test buffer and return it as one string per row.
fn render_to_rows(app: &App) -> Vec<String> {
    let backend = TestBackend::new(90, 40);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("Failed to draw frame");

    let buffer = terminal.backend().buffer();
    let width = buffer.area().width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(app: &App, needle: &str) -> bool {
    render_to_rows(app).iter().any(|row| row.contains(needle))
}

// ============================================================================
// Search Flow
// ============================================================================

#[test]
fn test_search_flow_filters_both_lists() {
    let mut app = App::new();
    app.set_active_tab(Tab::Search);

    type_text(&mut app, "brookhaven");

    let players = app.filtered_players();
    let games = app.filtered_games();
    assert!(players.is_empty());
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Brookhaven RP");
}

#[test]
fn test_search_query_matches_are_case_insensitive() {
    let mut app = App::new();
    app.set_active_tab(Tab::Search);

    type_text(&mut app, "SHADOW");

    let players = app.filtered_players();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].username, "Shadow_Runner");
}

#[test]
fn test_search_placeholder_vs_no_results() {
    let mut app = App::new();
    app.set_active_tab(Tab::Search);

    // Empty query: placeholder state, not "no results".
    assert!(screen_contains(&app, "Start typing to search..."));
    assert!(!screen_contains(&app, "No results found"));

    type_text(&mut app, "zzzz");
    assert!(screen_contains(&app, "No results found for \"zzzz\""));
    assert!(!screen_contains(&app, "Start typing to search..."));
}

#[test]
fn test_search_results_show_counts() {
    let mut app = App::new();
    app.set_active_tab(Tab::Search);

    // "o" matches 2 usernames and all 3 game names.
    type_text(&mut app, "o");

    assert_eq!(app.filtered_players().len(), 2);
    assert_eq!(app.filtered_games().len(), 3);
    assert!(screen_contains(&app, "Players (2)"));
    assert!(screen_contains(&app, "Games (3)"));
}

// ============================================================================
// Chat Flow
// ============================================================================

#[test]
fn test_chat_send_flow() {
    let mut app = App::new();
    app.set_active_tab(Tab::Chat);
    let seeded = app.chat_messages.len();

    type_text(&mut app, "hello");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.chat_messages.len(), seeded + 1);
    assert_eq!(app.chat_messages[0].message, "hello");
    assert_eq!(app.chat_messages[0].user, LOCAL_USER);
    assert_eq!(app.chat_messages[0].id, (seeded + 1).to_string());
    assert!(app.chat_draft.is_empty());

    // The sent message is rendered in the chat panel.
    assert!(screen_contains(&app, "hello"));
    assert!(screen_contains(&app, "Just now"));
}

#[test]
fn test_chat_blank_send_is_noop() {
    let mut app = App::new();
    app.set_active_tab(Tab::Chat);
    let before = app.chat_messages.clone();

    type_text(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.chat_messages, before);
    assert_eq!(app.chat_draft, "   ");
}

#[test]
fn test_chat_ids_stay_unique_across_sends() {
    let mut app = App::new();
    app.set_active_tab(Tab::Chat);

    for text in ["first", "second", "third"] {
        type_text(&mut app, text);
        app.handle_key(key(KeyCode::Enter));
    }

    let mut ids: Vec<&str> = app.chat_messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), app.chat_messages.len());
}

// ============================================================================
// Export Flow
// ============================================================================

#[test]
fn test_export_flow_writes_seeded_data() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut app = App::new();
    app.export_dir = dir.path().to_path_buf();
    let before = Utc::now();

    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));

    let entry = std::fs::read_dir(dir.path())
        .expect("Failed to read temp dir")
        .next()
        .expect("No export file written")
        .expect("Failed to read dir entry");
    let name = entry.file_name().into_string().expect("Non-UTF8 filename");
    assert!(name.starts_with("roblox-tracker-"));
    assert!(name.ends_with(".json"));

    let json = std::fs::read_to_string(entry.path()).expect("Failed to read export");
    let doc: ExportDocument = serde_json::from_str(&json).expect("Failed to parse export");
    assert_eq!(doc.players.len(), 3);
    assert_eq!(doc.games.len(), 3);
    assert!(doc.exported_at >= before);

    // The notice surfaces the written path, and the next keypress clears it.
    assert!(screen_contains(&app, "Exported to "));
    app.handle_key(key(KeyCode::Tab));
    assert!(!screen_contains(&app, "Exported to "));
}

#[test]
fn test_export_ignores_search_state() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut app = App::new();
    app.export_dir = dir.path().to_path_buf();
    app.set_active_tab(Tab::Search);
    type_text(&mut app, "zzzz");

    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));

    let entry = std::fs::read_dir(dir.path())
        .expect("Failed to read temp dir")
        .next()
        .expect("No export file written")
        .expect("Failed to read dir entry");
    let json = std::fs::read_to_string(entry.path()).expect("Failed to read export");
    let doc: ExportDocument = serde_json::from_str(&json).expect("Failed to parse export");

    // Export is always the full lists, never the filtered view.
    assert_eq!(doc.players.len(), 3);
    assert_eq!(doc.games.len(), 3);
}

// ============================================================================
// Tab Rendering
// ============================================================================

/// A marker string rendered by exactly one panel.
fn panel_marker(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "Live Activity",
        Tab::Players => "Account Age",
        Tab::Search => "Search Players & Games",
        Tab::Chat => "Observer Chat",
    }
}

#[test]
fn test_each_tab_renders_exactly_its_panel() {
    let mut app = App::new();

    for active in Tab::ALL {
        app.set_active_tab(active);
        for other in Tab::ALL {
            let visible = screen_contains(&app, panel_marker(other));
            assert_eq!(
                visible,
                active == other,
                "panel marker for {:?} visibility wrong while {:?} is active",
                other,
                active
            );
        }
    }
}

#[test]
fn test_tab_and_backtab_cycle_through_all_panels() {
    let mut app = App::new();
    assert_eq!(app.active_tab, Tab::Home);

    let forward = [Tab::Players, Tab::Search, Tab::Chat, Tab::Home];
    for expected in forward {
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_tab, expected);
    }

    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.active_tab, Tab::Chat);
}

#[test]
fn test_home_panel_shows_seeded_stats() {
    let app = App::new();
    let rows = render_to_rows(&app);
    let joined = rows.join("\n");

    assert!(joined.contains("Players Online"));
    assert!(joined.contains("Popular Games"));
    assert!(joined.contains("Brookhaven RP"));
}
