//! Color theme constants for the tracker UI.

use ratatui::style::Color;

use crate::models::PlayerStatus;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights, the active tab and in-game badges.
pub const COLOR_ACCENT: Color = Color::LightRed;

/// Header/title text color.
pub const COLOR_HEADER: Color = Color::White;

/// Online players and other healthy indicators.
pub const COLOR_ONLINE: Color = Color::LightGreen;

/// Offline players and other inert indicators.
pub const COLOR_OFFLINE: Color = Color::Gray;

/// Dim text for less important info.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Warning banner text.
pub const COLOR_WARNING: Color = Color::LightYellow;

/// Color token for a player status badge. Total over the enum.
pub fn status_color(status: PlayerStatus) -> Color {
    match status {
        PlayerStatus::Online => COLOR_ONLINE,
        PlayerStatus::InGame => COLOR_ACCENT,
        PlayerStatus::Offline => COLOR_OFFLINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_mapping() {
        assert_eq!(status_color(PlayerStatus::Online), COLOR_ONLINE);
        assert_eq!(status_color(PlayerStatus::InGame), COLOR_ACCENT);
        assert_eq!(status_color(PlayerStatus::Offline), COLOR_OFFLINE);
    }
}
