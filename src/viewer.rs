//! Viewer state
//!
//! The single owner of the loaded collection and the current control values.
//! Surfaces drive it through the `set_*` methods and [`Viewer::apply_load`],
//! then render from [`Viewer::list_view`].

use crate::error::LoadError;
use crate::filters::{filter_and_sort, Category, FilterOptions, PostedSort, TitleSort, ViewQuery};
use crate::jobs::Job;
use crate::render::{ErrorBanner, ListView};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct Viewer {
    jobs: Vec<Job>,
    options: FilterOptions,
    query: ViewQuery,
    banner: ErrorBanner,
    list_visible: bool,
    /// Set by a successful load until the next control change: the list is
    /// shown in file order, whatever the sort controls say.
    file_order: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the outcome of a load.
    ///
    /// Success replaces the collection, rebuilds the selectors (filters go
    /// back to "All") and shows the list in file order. Sort controls apply
    /// from the next control change. Failure shows the banner and clears the
    /// list region; the previous collection is kept.
    pub fn apply_load(&mut self, outcome: Result<Vec<Job>, LoadError>) {
        self.banner.clear();

        match outcome {
            Ok(jobs) => {
                info!(jobs = jobs.len(), "Replacing job collection");
                self.options = FilterOptions::derive(&jobs);
                self.jobs = jobs;
                self.query.clear_filters();
                self.list_visible = true;
                self.file_order = true;
            }
            Err(e) => {
                warn!(error = %e, "Load failed");
                self.banner.show(e.to_string());
                self.list_visible = false;
            }
        }
    }

    pub fn set_level(&mut self, level: Option<String>) {
        self.query.level = level;
        self.refresh();
    }

    pub fn set_job_type(&mut self, job_type: Option<String>) {
        self.query.job_type = job_type;
        self.refresh();
    }

    pub fn set_skill(&mut self, skill: Option<String>) {
        self.query.skill = skill;
        self.refresh();
    }

    pub fn set_filter(&mut self, category: Category, value: Option<String>) {
        match category {
            Category::Level => self.set_level(value),
            Category::Type => self.set_job_type(value),
            Category::Skill => self.set_skill(value),
        }
    }

    pub fn set_title_sort(&mut self, sort: Option<TitleSort>) {
        self.query.title_sort = sort;
        self.refresh();
    }

    pub fn set_posted_sort(&mut self, sort: Option<PostedSort>) {
        self.query.posted_sort = sort;
        self.refresh();
    }

    /// Apply every control at once, as one interaction.
    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
        self.refresh();
    }

    /// Any control change re-renders the list; the banner stays as it is.
    fn refresh(&mut self) {
        self.list_visible = true;
        self.file_order = false;
        debug!(query = ?self.query, "View controls changed");
    }

    pub fn visible(&self) -> Vec<&Job> {
        if self.file_order {
            return self.jobs.iter().collect();
        }
        filter_and_sort(&self.jobs, &self.query)
    }

    /// `None` while the list region is cleared.
    pub fn list_view(&self) -> Option<ListView> {
        self.list_visible
            .then(|| ListView::from_jobs(&self.visible()))
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn filter_value(&self, category: Category) -> Option<&str> {
        match category {
            Category::Level => self.query.level.as_deref(),
            Category::Type => self.query.job_type.as_deref(),
            Category::Skill => self.query.skill.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NOT_AN_ARRAY;
    use crate::loader::parse_jobs;
    use crate::render::EMPTY_MESSAGE;

    const LISTINGS: &str = r#"[
        {"Title": "Zeta", "Posted": "2 hours ago", "Level": "Senior", "Type": "Full-time", "Skill": ["Rust"]},
        {"Title": "alpha", "Posted": "10 minutes ago", "Level": "Junior", "Type": "Contract", "Skill": "Go"},
        {"Title": "Mid", "Posted": "1 day ago", "Level": "Senior", "Type": "Contract", "Skill": ["Go", "Rust"]}
    ]"#;

    fn loaded() -> Viewer {
        let mut viewer = Viewer::new();
        viewer.apply_load(parse_jobs(LISTINGS));
        viewer
    }

    fn titles(viewer: &Viewer) -> Vec<String> {
        viewer.visible().iter().map(|job| job.title.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_blank() {
        let viewer = Viewer::new();
        assert!(viewer.jobs().is_empty());
        assert!(!viewer.banner().is_visible());
        assert_eq!(viewer.list_view(), None);
    }

    #[test]
    fn test_load_shows_collection_and_options() {
        let viewer = loaded();
        assert_eq!(viewer.jobs().len(), 3);
        assert_eq!(viewer.options().levels, vec!["Senior", "Junior"]);
        assert_eq!(viewer.options().skills, vec!["Rust", "Go"]);
        assert_eq!(viewer.list_view().map(|view| view.len()), Some(3));
    }

    #[test]
    fn test_title_then_posted_sort() {
        let mut viewer = loaded();
        viewer.set_title_sort(Some(TitleSort::Asc));
        assert_eq!(titles(&viewer), vec!["alpha", "Mid", "Zeta"]);

        viewer.set_posted_sort(Some(PostedSort::Newest));
        assert_eq!(titles(&viewer), vec!["alpha", "Zeta", "Mid"]);

        viewer.set_posted_sort(None);
        assert_eq!(titles(&viewer), vec!["alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_no_match_renders_placeholder() {
        let mut viewer = loaded();
        viewer.set_level(Some("Junior".into()));
        viewer.set_skill(Some("Rust".into()));
        assert_eq!(viewer.list_view(), Some(ListView::Empty));
        assert_eq!(
            crate::render::html::list(&ListView::Empty),
            format!("<p>{}</p>", EMPTY_MESSAGE)
        );
    }

    #[test]
    fn test_object_root_shows_error_and_clears_list() {
        let mut viewer = loaded();
        viewer.apply_load(parse_jobs(r#"{"Title": "x"}"#));

        assert!(viewer.banner().text().contains("Invalid JSON format"));
        assert_eq!(
            viewer.banner().text(),
            format!("Error parsing JSON: {}", NOT_AN_ARRAY)
        );
        assert_eq!(viewer.list_view(), None);
        // The previous collection is still held.
        assert_eq!(viewer.jobs().len(), 3);
    }

    #[test]
    fn test_missing_input_message() {
        let mut viewer = Viewer::new();
        viewer.apply_load(Err(LoadError::MissingInput));
        assert_eq!(viewer.banner().text(), "Please select a JSON file first.");
        assert_eq!(viewer.list_view(), None);
    }

    #[test]
    fn test_control_change_after_error_rerenders_previous_jobs() {
        let mut viewer = loaded();
        viewer.apply_load(Err(LoadError::Read));
        viewer.set_job_type(Some("Contract".into()));

        assert!(viewer.banner().is_visible());
        assert_eq!(viewer.list_view().map(|view| view.len()), Some(2));
    }

    #[test]
    fn test_successful_load_clears_error_and_filters() {
        let mut viewer = loaded();
        viewer.set_level(Some("Senior".into()));
        viewer.set_title_sort(Some(TitleSort::Desc));
        viewer.apply_load(Err(LoadError::Read));

        viewer.apply_load(parse_jobs(LISTINGS));
        assert!(!viewer.banner().is_visible());
        assert_eq!(viewer.query().level, None);
        assert_eq!(viewer.query().title_sort, Some(TitleSort::Desc));
    }

    #[test]
    fn test_first_render_after_load_is_file_order() {
        let mut viewer = loaded();
        viewer.set_title_sort(Some(TitleSort::Asc));
        viewer.set_posted_sort(Some(PostedSort::Newest));
        assert_eq!(titles(&viewer), vec!["alpha", "Zeta", "Mid"]);

        viewer.apply_load(parse_jobs(LISTINGS));
        assert_eq!(titles(&viewer), vec!["Zeta", "alpha", "Mid"]);

        // The kept directives take effect on the next control change.
        viewer.set_level(None);
        assert_eq!(titles(&viewer), vec!["alpha", "Zeta", "Mid"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut viewer = loaded();
        viewer.set_filter(Category::Skill, Some("Go".into()));
        assert_eq!(viewer.list_view(), viewer.list_view());
        assert_eq!(viewer.filter_value(Category::Skill), Some("Go"));
    }
}
