//! Detail Widget
//!
//! Side pane with everything known about the selected job.

use crate::jobs::Job;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the detail pane for `job`
pub fn render_detail(frame: &mut Frame, area: Rect, job: Option<&Job>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let Some(job) = job else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No job selected",
            Theme::text_dim(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let skills = if job.skill.is_empty() {
        Line::from(Span::styled("none listed", Theme::text_dim()))
    } else {
        Line::from(
            job.skill
                .iter()
                .filter(|skill| !skill.is_empty())
                .flat_map(|skill| {
                    [
                        Span::styled(Icons::SKILL, Theme::text_dim()),
                        Span::styled(format!("{}  ", skill), Theme::skill_tag()),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    };

    let lines = vec![
        Line::from(Span::styled(job.title.clone(), Theme::title())),
        Line::from(""),
        field("Type", &job.job_type),
        field("Level", &job.level),
        Line::from(vec![
            Span::styled(format!("{:<8}", "Posted"), Theme::text_secondary()),
            Span::styled(job.posted.display.clone(), Theme::posted(job.posted.minutes)),
        ]),
        field("Raw", &job.posted_time),
        Line::from(""),
        Line::from(Span::styled("Skills", Theme::heading())),
        skills,
        Line::from(""),
        Line::from(Span::styled("Detail", Theme::heading())),
        Line::from(Span::styled(job.detail.clone(), Theme::text())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Theme::text_secondary()),
        Span::styled(value.to_string(), Theme::text()),
    ])
}
