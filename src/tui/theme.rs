//! Theme and Styling
//!
//! A muted slate palette with one amber accent. Job cards get their own
//! styles: badges for type and level, and a posted-time color that fades as
//! listings get older.

use ratatui::style::{Color, Modifier, Style};

/// Postings younger than this read as fresh.
const FRESH_MINUTES: u64 = 60;
/// Postings younger than this (one day) read as recent.
const RECENT_MINUTES: u64 = 1440;

/// Application theme
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(245, 166, 35);
    pub const FRESH: Color = Color::Rgb(110, 200, 140);
    pub const RECENT: Color = Color::Rgb(230, 200, 110);
    pub const ERROR: Color = Color::Rgb(232, 90, 79);

    pub const INK: Color = Color::Rgb(222, 226, 232);
    pub const INK_MUTED: Color = Color::Rgb(146, 154, 166);
    pub const INK_FAINT: Color = Color::Rgb(92, 99, 112);

    pub const FRAME: Color = Color::Rgb(58, 64, 76);
    pub const FRAME_FOCUSED: Color = Color::Rgb(245, 166, 35);

    pub const TYPE_BADGE: Color = Color::Rgb(52, 84, 122);
    pub const LEVEL_BADGE: Color = Color::Rgb(88, 64, 120);

    pub fn text() -> Style {
        Style::default().fg(Self::INK)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Self::INK_MUTED)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::INK_FAINT)
    }

    /// Header and detail-pane title
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::FRESH)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::RECENT)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FRAME)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::FRAME_FOCUSED)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(Self::INK_FAINT)
    }

    /// Value of the control that has focus
    pub fn control_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Job type chip on a card
    pub fn type_badge() -> Style {
        Style::default().fg(Self::INK).bg(Self::TYPE_BADGE)
    }

    /// Level chip on a card
    pub fn level_badge() -> Style {
        Style::default().fg(Self::INK).bg(Self::LEVEL_BADGE)
    }

    pub fn skill_tag() -> Style {
        Style::default()
            .fg(Self::FRESH)
            .add_modifier(Modifier::ITALIC)
    }

    /// Posted time colored by age; unrecognised phrases are dimmed.
    pub fn posted(minutes: Option<u64>) -> Style {
        match minutes {
            Some(m) if m < FRESH_MINUTES => Style::default().fg(Self::FRESH),
            Some(m) if m < RECENT_MINUTES => Style::default().fg(Self::RECENT),
            Some(_) => Style::default().fg(Self::INK_MUTED),
            None => Style::default()
                .fg(Self::INK_FAINT)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Glyphs used across widgets
pub struct Icons;

impl Icons {
    pub const ERROR: &'static str = "!";
    pub const CURSOR: &'static str = "_";
    pub const SELECTED: &'static str = "›";
    pub const SKILL: &'static str = "#";
    pub const CLOCK: &'static str = "◷";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posted_style_fades_with_age() {
        assert_eq!(Theme::posted(Some(5)).fg, Some(Theme::FRESH));
        assert_eq!(Theme::posted(Some(120)).fg, Some(Theme::RECENT));
        assert_eq!(Theme::posted(Some(4320)).fg, Some(Theme::INK_MUTED));
        assert_eq!(Theme::posted(None).fg, Some(Theme::INK_FAINT));
    }
}
