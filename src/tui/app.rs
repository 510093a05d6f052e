//! Application State
//!
//! Terminal-side state around the [`Viewer`]: focus, selection, the file path
//! editor and which overlays are open.

use crate::config::Config;
use crate::filters::{Category, PostedSort, TitleSort};
use crate::jobs::Job;
use crate::loader;
use crate::tui::event::AppAction;
use crate::viewer::Viewer;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use tracing::info;

/// Number of cards a page jump moves.
const PAGE_SIZE: usize = 10;

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    List,
    Help,
}

/// The five view controls, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Level,
    Type,
    Skill,
    TitleSort,
    PostedSort,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Level,
        Control::Type,
        Control::Skill,
        Control::TitleSort,
        Control::PostedSort,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Level => "Level",
            Control::Type => "Type",
            Control::Skill => "Skill",
            Control::TitleSort => "Title",
            Control::PostedSort => "Posted",
        }
    }

    fn category(&self) -> Option<Category> {
        match self {
            Control::Level => Some(Category::Level),
            Control::Type => Some(Category::Type),
            Control::Skill => Some(Category::Skill),
            Control::TitleSort | Control::PostedSort => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct App {
    pub config: Config,
    pub viewer: Viewer,

    // UI State
    pub view: View,
    pub should_quit: bool,
    pub focus: Control,
    pub selected: usize,
    pub show_detail: bool,

    // File path editor
    pub path_input: String,
    pub editing_path: bool,
}

impl App {
    pub fn new(config: Config, file: Option<PathBuf>) -> Self {
        let path_input = file
            .or_else(|| config.viewer.default_file.clone())
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        Self {
            config,
            viewer: Viewer::new(),
            view: View::List,
            should_quit: false,
            focus: Control::Level,
            selected: 0,
            show_detail: false,
            editing_path: path_input.is_empty(),
            path_input,
        }
    }

    /// Load the file named in the path editor.
    pub async fn load(&mut self) {
        let trimmed = self.path_input.trim();
        let path = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));

        info!(path = ?path, "Loading listings");
        let outcome = loader::load_file(path.as_deref()).await;
        self.viewer.apply_load(outcome);
        self.editing_path = false;
        self.selected = 0;
    }

    /// Handle a user action
    pub async fn handle_action(&mut self, action: AppAction) {
        if self.view == View::Help && !matches!(action, AppAction::Tick) {
            // Any key closes help
            if matches!(action, AppAction::ForceQuit | AppAction::Quit) {
                self.should_quit = true;
            }
            self.view = View::List;
            return;
        }

        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::OpenFile => {
                self.editing_path = true;
            }
            AppAction::Submit => {
                if self.editing_path {
                    self.load().await;
                } else {
                    self.show_detail = !self.show_detail;
                }
            }
            AppAction::ToggleHelp => {
                self.view = View::Help;
            }
            AppAction::Escape => {
                if self.editing_path {
                    self.editing_path = false;
                } else {
                    self.show_detail = false;
                }
            }
            AppAction::NextControl => {
                self.focus = self.focus.next();
            }
            AppAction::PrevControl => {
                self.focus = self.focus.prev();
            }
            AppAction::CycleNext => {
                if !self.editing_path {
                    self.cycle(1);
                }
            }
            AppAction::CyclePrev => {
                if !self.editing_path {
                    self.cycle(-1);
                }
            }
            AppAction::SelectUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppAction::SelectDown => {
                self.move_selection(1);
            }
            AppAction::PageUp => {
                self.selected = self.selected.saturating_sub(PAGE_SIZE);
            }
            AppAction::PageDown => {
                self.move_selection(PAGE_SIZE);
            }
            AppAction::DeleteKey => {
                if self.editing_path {
                    self.path_input.pop();
                }
            }
            AppAction::Input(key_event) => {
                self.handle_input(key_event);
            }
            AppAction::Tick => {}
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };

        if self.editing_path {
            self.path_input.push(c);
            return;
        }

        match c {
            'd' => self.show_detail = !self.show_detail,
            '?' => self.view = View::Help,
            'q' => self.should_quit = true,
            _ => {}
        }
    }

    fn move_selection(&mut self, by: usize) {
        let count = self.viewer.visible().len();
        self.selected = (self.selected + by).min(count.saturating_sub(1));
    }

    /// Step the focused control through its values, wrapping around.
    fn cycle(&mut self, step: isize) {
        match self.focus {
            Control::TitleSort => {
                let values = [None, Some(TitleSort::Asc), Some(TitleSort::Desc)];
                let next = step_value(&values, &self.viewer.query().title_sort, step);
                self.viewer.set_title_sort(next);
            }
            Control::PostedSort => {
                let values = [None, Some(PostedSort::Newest), Some(PostedSort::Oldest)];
                let next = step_value(&values, &self.viewer.query().posted_sort, step);
                self.viewer.set_posted_sort(next);
            }
            control => {
                let Some(category) = control.category() else {
                    return;
                };
                let values: Vec<Option<String>> = std::iter::once(None)
                    .chain(
                        self.viewer
                            .options()
                            .values(category)
                            .iter()
                            .cloned()
                            .map(Some),
                    )
                    .collect();
                let current = self.viewer.filter_value(category).map(str::to_string);
                let next = step_value(&values, &current, step);
                self.viewer.set_filter(category, next);
            }
        }

        self.selected = 0;
    }

    /// Text shown for a control's current value.
    pub fn control_value(&self, control: Control) -> String {
        match control {
            Control::TitleSort => match self.viewer.query().title_sort {
                Some(TitleSort::Asc) => "A-Z".to_string(),
                Some(TitleSort::Desc) => "Z-A".to_string(),
                None => "Unsorted".to_string(),
            },
            Control::PostedSort => match self.viewer.query().posted_sort {
                Some(PostedSort::Newest) => "Newest".to_string(),
                Some(PostedSort::Oldest) => "Oldest".to_string(),
                None => "Unsorted".to_string(),
            },
            control => match control.category() {
                Some(category) => self
                    .viewer
                    .filter_value(category)
                    .unwrap_or(category.sentinel())
                    .to_string(),
                None => String::new(),
            },
        }
    }

    /// The job under the cursor, if the list shows any.
    pub fn selected_job(&self) -> Option<&Job> {
        self.viewer.list_view()?;
        self.viewer.visible().get(self.selected).copied()
    }
}

fn step_value<T: Clone + PartialEq>(values: &[T], current: &T, step: isize) -> T {
    let len = values.len() as isize;
    let index = values.iter().position(|v| v == current).unwrap_or(0) as isize;
    values[(index + step).rem_euclid(len) as usize].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ServerConfig, ViewerConfig};
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: Vec::new(),
            },
            viewer: ViewerConfig {
                default_file: None,
                tick_rate_ms: 100,
            },
            logging: LoggingConfig {
                log_dir: std::env::temp_dir(),
            },
        }
    }

    fn char_key(c: char) -> AppAction {
        AppAction::Input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    async fn loaded_app(temp_dir: &TempDir) -> App {
        let path = temp_dir.path().join("jobs.json");
        std::fs::write(
            &path,
            r#"[
                {"Title": "Zeta", "Posted": "1 day ago", "Level": "Senior", "Skill": ["Rust"]},
                {"Title": "Alpha", "Posted": "5 minutes ago", "Level": "Junior", "Skill": "Go"}
            ]"#,
        )
        .unwrap();

        let mut app = App::new(config(), Some(path));
        app.load().await;
        app
    }

    #[tokio::test]
    async fn test_starts_editing_without_file() {
        let app = App::new(config(), None);
        assert!(app.editing_path);
        assert!(app.path_input.is_empty());
    }

    #[tokio::test]
    async fn test_enter_with_empty_path_reports_missing_file() {
        let mut app = App::new(config(), None);
        app.handle_action(AppAction::Submit).await;
        assert_eq!(
            app.viewer.banner().text(),
            "Please select a JSON file first."
        );
    }

    #[tokio::test]
    async fn test_typed_path_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.json");
        std::fs::write(&path, r#"[{"Title": "Only"}]"#).unwrap();

        let mut app = App::new(config(), None);
        for c in path.display().to_string().chars() {
            app.handle_action(char_key(c)).await;
        }
        app.handle_action(AppAction::Submit).await;

        assert!(!app.editing_path);
        assert_eq!(app.viewer.jobs().len(), 1);
        assert_eq!(app.selected_job().map(|job| job.title.as_str()), Some("Only"));
    }

    #[tokio::test]
    async fn test_cycle_level_filter() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = loaded_app(&temp_dir).await;

        app.handle_action(AppAction::CycleNext).await;
        assert_eq!(app.control_value(Control::Level), "Senior");
        assert_eq!(app.viewer.visible().len(), 1);

        app.handle_action(AppAction::CyclePrev).await;
        assert_eq!(app.control_value(Control::Level), "All Levels");

        app.handle_action(AppAction::CyclePrev).await;
        assert_eq!(app.control_value(Control::Level), "Junior");
    }

    #[tokio::test]
    async fn test_cycle_posted_sort() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = loaded_app(&temp_dir).await;

        app.handle_action(AppAction::PrevControl).await;
        assert_eq!(app.focus, Control::PostedSort);
        app.handle_action(AppAction::CycleNext).await;
        assert_eq!(app.control_value(Control::PostedSort), "Newest");
        assert_eq!(app.selected_job().map(|job| job.title.as_str()), Some("Alpha"));
    }

    #[tokio::test]
    async fn test_selection_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = loaded_app(&temp_dir).await;

        app.handle_action(AppAction::PageDown).await;
        assert_eq!(app.selected, 1);
        app.handle_action(AppAction::SelectUp).await;
        app.handle_action(AppAction::SelectUp).await;
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_detail_and_help_toggles() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = loaded_app(&temp_dir).await;

        app.handle_action(char_key('d')).await;
        assert!(app.show_detail);
        app.handle_action(AppAction::Escape).await;
        assert!(!app.show_detail);

        app.handle_action(AppAction::ToggleHelp).await;
        assert_eq!(app.view, View::Help);
        app.handle_action(char_key('x')).await;
        assert_eq!(app.view, View::List);
    }

    #[tokio::test]
    async fn test_failed_load_hides_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = loaded_app(&temp_dir).await;

        app.path_input = temp_dir.path().join("missing.json").display().to_string();
        app.load().await;
        assert_eq!(app.viewer.banner().text(), "Error reading file.");
        assert!(app.selected_job().is_none());
    }

    #[test]
    fn test_step_value_wraps() {
        let values = [0, 1, 2];
        assert_eq!(step_value(&values, &2, 1), 0);
        assert_eq!(step_value(&values, &0, -1), 2);
    }
}
