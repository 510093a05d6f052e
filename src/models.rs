use crate::config::Config;
use crate::filters::Category;
use crate::render::html;
use crate::viewer::Viewer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state of the browser viewer: one viewer per server process.
#[derive(Clone)]
pub struct AppState {
    pub viewer: Arc<RwLock<Viewer>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            viewer: Arc::new(RwLock::new(Viewer::new())),
            config,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub jobs: usize,
}

/// Selector contents as `<option>` markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionLists {
    pub levels_html: String,
    pub types_html: String,
    pub skills_html: String,
}

/// Everything the page needs to redraw after an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewResponse {
    /// Banner text; `None` hides the banner.
    pub error: Option<String>,
    /// List region markup; empty while the region is cleared.
    pub list_html: String,
    /// Number of jobs shown.
    pub count: usize,
    pub options: OptionLists,
}

impl ViewResponse {
    pub fn from_viewer(viewer: &Viewer) -> Self {
        let list = viewer.list_view();
        let options = viewer.options();

        Self {
            error: viewer.banner().message().map(str::to_string),
            list_html: list.as_ref().map(html::list).unwrap_or_default(),
            count: list.as_ref().map_or(0, |view| view.len()),
            options: OptionLists {
                levels_html: html::options(options, Category::Level, viewer.filter_value(Category::Level)),
                types_html: html::options(options, Category::Type, viewer.filter_value(Category::Type)),
                skills_html: html::options(options, Category::Skill, viewer.filter_value(Category::Skill)),
            },
        }
    }
}
