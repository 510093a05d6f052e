//! HTML fragments for the browser viewer

use super::{JobCard, ListView, EMPTY_MESSAGE};
use crate::filters::{Category, FilterOptions};
use std::fmt::Write as _;
use v_htmlescape::escape;

/// Render the list region.
pub fn list(view: &ListView) -> String {
    match view {
        ListView::Empty => format!("<p>{}</p>", EMPTY_MESSAGE),
        ListView::Cards(cards) => cards.iter().map(card).collect(),
    }
}

fn card(card: &JobCard) -> String {
    format!(
        "<div class=\"job-card\">\
         <h3>{}</h3>\
         <p>Type: {}</p>\
         <p>Level: {}</p>\
         <p>Posted: {}</p>\
         </div>",
        escape(&card.title),
        escape(&card.job_type),
        escape(&card.level),
        escape(&card.posted),
    )
}

/// Render the `<option>` list of one selector, sentinel first.
pub fn options(options: &FilterOptions, category: Category, selected: Option<&str>) -> String {
    let selected = selected.unwrap_or("");
    let mut out = String::new();

    let _ = write!(
        out,
        "<option value=\"\"{}>{}</option>",
        if selected.is_empty() { " selected" } else { "" },
        category.sentinel()
    );

    for raw in options.values(category) {
        let mark = if raw == selected { " selected" } else { "" };
        let value = escape(raw);
        let _ = write!(out, "<option value=\"{value}\"{mark}>{value}</option>");
    }

    out
}
