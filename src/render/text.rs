//! Plain-text rendering for the `list` command

use super::{ListView, EMPTY_MESSAGE};

pub fn list(view: &ListView) -> String {
    let ListView::Cards(cards) = view else {
        return format!("{}\n", EMPTY_MESSAGE);
    };

    let mut out = String::new();
    for (idx, card) in cards.iter().enumerate() {
        out.push_str("[ ");
        out.push_str(&card.title);
        out.push_str(" ]\n");
        out.push_str(&format!("Type   : {}\n", card.job_type));
        out.push_str(&format!("Level  : {}\n", card.level));
        out.push_str(&format!("Posted : {}\n", card.posted));

        if idx + 1 < cards.len() {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::Job;
    use serde_json::json;

    #[test]
    fn test_cards_are_separated_by_blank_line() {
        let a = Job::from_record(&json!({ "Title": "A", "Posted": "3 days ago" }));
        let b = Job::from_record(&json!({ "Title": "B" }));
        let out = list(&ListView::from_jobs(&[&a, &b]));
        assert_eq!(
            out,
            "[ A ]\nType   : Unspecified\nLevel  : Not Specified\nPosted : 4320 minutes ago\n\n\
             [ B ]\nType   : Unspecified\nLevel  : Not Specified\nPosted : N/A\n"
        );
    }

    #[test]
    fn test_empty_view() {
        assert_eq!(list(&ListView::Empty), "No jobs match the current filters.\n");
    }
}
