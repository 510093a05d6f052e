//! UI Rendering
//!
//! Main UI layout and rendering logic for the TUI.

use crate::render::{JobCard, ListView, EMPTY_MESSAGE};
use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Terminal rows taken by one card.
const CARD_HEIGHT: usize = 3;

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let banner_height = if app.viewer.banner().is_visible() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // File path
            Constraint::Length(3),             // Filters & sort
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(5),                // Job list
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_file_bar(frame, chunks[1], app);
    widgets::render_controls(frame, chunks[2], app);
    if banner_height > 0 {
        render_banner(frame, chunks[3], app);
    }

    if app.show_detail {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[4]);
        render_jobs(frame, body[0], app);
        widgets::render_detail(frame, body[1], app.selected_job());
    } else {
        render_jobs(frame, chunks[4], app);
    }

    render_status_bar(frame, chunks[5], app);

    if app.view == View::Help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("job-lens", Theme::title()),
        Span::styled(
            format!("  {} jobs loaded", app.viewer.jobs().len()),
            Theme::text_secondary(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    frame.render_widget(title, area);
}

fn render_file_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" File ")
        .borders(Borders::ALL)
        .border_style(if app.editing_path {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let mut spans = Vec::new();
    if app.path_input.is_empty() && app.editing_path {
        spans.push(Span::styled("Path to a JSON file...", Theme::text_dim()));
    } else {
        spans.push(Span::styled(app.path_input.clone(), Theme::text()));
    }
    if app.editing_path {
        spans.push(Span::styled(Icons::CURSOR, Theme::warning()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", Icons::ERROR), Theme::error()),
        Span::styled(app.viewer.banner().text().to_string(), Theme::error()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::error()),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Render the job list region
fn render_jobs(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Jobs ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Cleared while an error is shown
    let Some(view) = app.viewer.list_view() else {
        return;
    };

    let lines = job_lines(&view, app.selected);
    let scroll = scroll_offset(app.selected, inner.height);

    let paragraph = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Rows to scroll so the selected card's last line is visible.
fn scroll_offset(selected: usize, visible_rows: u16) -> u16 {
    let cursor_bottom = selected.saturating_add(1).saturating_mul(CARD_HEIGHT);
    let scroll = cursor_bottom.saturating_sub(visible_rows as usize);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

/// Lines for the list region, marking the selected card.
pub fn job_lines(view: &ListView, selected: usize) -> Vec<Line<'static>> {
    let ListView::Cards(cards) = view else {
        return vec![Line::from(Span::styled(EMPTY_MESSAGE, Theme::text_secondary()))];
    };

    cards
        .iter()
        .enumerate()
        .flat_map(|(idx, card)| card_lines(card, idx == selected))
        .collect()
}

fn card_lines(card: &JobCard, selected: bool) -> [Line<'static>; CARD_HEIGHT] {
    let (marker, title_style) = if selected {
        (Icons::SELECTED, Theme::selected())
    } else {
        (" ", Theme::heading())
    };

    [
        Line::from(vec![
            Span::styled(format!("{} ", marker), Theme::selected()),
            Span::styled(card.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", card.job_type), Theme::type_badge()),
            Span::raw(" "),
            Span::styled(format!(" {} ", card.level), Theme::level_badge()),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", Icons::CLOCK, card.posted),
                Theme::posted(card.minutes),
            ),
        ]),
        Line::from(""),
    ]
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.viewer.list_view() {
        Some(view) => Span::styled(format!("{} shown", view.len()), Theme::success()),
        None if app.viewer.banner().is_visible() => Span::styled("Load failed", Theme::error()),
        None => Span::styled("No file loaded", Theme::text_secondary()),
    };

    let shortcuts = vec![
        Span::styled(" [Ctrl+O]", Theme::shortcut_key()),
        Span::styled(" Open ", Theme::shortcut_desc()),
        Span::styled("[Tab]", Theme::shortcut_key()),
        Span::styled(" Control ", Theme::shortcut_desc()),
        Span::styled("[←/→]", Theme::shortcut_key()),
        Span::styled(" Change ", Theme::shortcut_desc()),
        Span::styled("[d]", Theme::shortcut_key()),
        Span::styled(" Details ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Q]", Theme::shortcut_key()),
        Span::styled(" Quit ", Theme::shortcut_desc()),
        Span::styled("[F1]", Theme::shortcut_key()),
        Span::styled(" Help", Theme::shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help modal
fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let rows = [
        ("Ctrl+O       ", "Edit file path"),
        ("Enter        ", "Load file / toggle details"),
        ("Tab/Shift+Tab", "Focus next / previous control"),
        ("←/→          ", "Change the focused control"),
        ("↑/↓          ", "Select job"),
        ("PageUp/Down  ", "Jump ten jobs"),
        ("d            ", "Toggle detail pane"),
        ("Esc          ", "Cancel editing / close details"),
        ("Ctrl+Q       ", "Quit application"),
        ("F1 / ?       ", "Show this help"),
    ];

    let mut help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
    ];
    help_lines.extend(rows.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(*key, Theme::shortcut_key()),
            Span::styled(format!(" {}", desc), Theme::text()),
        ])
    }));
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Theme::text_dim(),
    )));

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
