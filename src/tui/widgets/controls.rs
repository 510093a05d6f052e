//! Controls Widget
//!
//! The filter and sort selectors, one cell per control.

use crate::tui::app::{App, Control};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the control bar
pub fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Filters & Sort ")
        .borders(Borders::ALL)
        .border_style(if app.editing_path {
            Theme::border()
        } else {
            Theme::border_focused()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = (inner.width as usize / Control::ALL.len()).saturating_sub(1);
    let mut spans = Vec::new();

    for control in Control::ALL {
        let focused = control == app.focus && !app.editing_path;
        let label_style = if focused {
            Theme::control_focused()
        } else {
            Theme::text_secondary()
        };

        let label = format!(" {} ", control.label());
        let value_width = cell_width.saturating_sub(label.chars().count() + 1);
        let value = truncate_string(&app.control_value(control), value_width);

        spans.push(Span::styled(label, label_style));
        spans.push(Span::styled(
            format!(" {:<width$}", value, width = value_width),
            if focused { Theme::selected() } else { Theme::text() },
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Truncate a string to fit within a given width
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_string("Senior", 10), "Senior");
        assert_eq!(truncate_string("Développeur", 8), "Dével...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }
}
