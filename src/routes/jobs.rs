//! Job listing endpoints
//!
//! - `POST /api/jobs/load` - load file contents chosen in the page
//! - `GET /api/jobs` - apply filter and sort selections

use crate::error::LoadError;
use crate::filters::{PostedSort, TitleSort, ViewQuery};
use crate::loader::parse_jobs;
use crate::models::{AppState, ViewResponse};
use axum::{
    extract::{DefaultBodyLimit, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/jobs", get(view_jobs))
        // Job files of any size are accepted
        .route(
            "/api/jobs/load",
            post(load_jobs).layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}

/// How the page reports its file selection.
#[derive(Debug, Default, Deserialize)]
pub struct LoadParams {
    /// Name of the chosen file; absent when nothing was chosen.
    pub file: Option<String>,
    /// Set when the browser failed to read the file.
    #[serde(default)]
    pub read_error: bool,
}

/// Raw selector values as the page sends them. Empty means unset.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub level: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub skill: Option<String>,
    pub sort_title: Option<String>,
    pub sort_posted: Option<String>,
}

impl ViewParams {
    pub fn into_query(self) -> ViewQuery {
        ViewQuery {
            level: non_empty(self.level),
            job_type: non_empty(self.job_type),
            skill: non_empty(self.skill),
            title_sort: directive::<TitleSort>(self.sort_title),
            posted_sort: directive::<PostedSort>(self.sort_posted),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unrecognised directives leave that sort unset.
fn directive<T: FromStr>(value: Option<String>) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let value = non_empty(value)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(error = %e, "Ignoring sort directive");
            None
        }
    }
}

async fn load_jobs(
    State(state): State<AppState>,
    Query(params): Query<LoadParams>,
    body: String,
) -> Json<ViewResponse> {
    info!(file = ?params.file, bytes = body.len(), "Load requested");

    let outcome = match params.file {
        None => Err(LoadError::MissingInput),
        Some(_) if params.read_error => Err(LoadError::Read),
        Some(_) => parse_jobs(&body),
    };

    let mut viewer = state.viewer.write().await;
    viewer.apply_load(outcome);
    Json(ViewResponse::from_viewer(&viewer))
}

async fn view_jobs(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Json<ViewResponse> {
    let mut viewer = state.viewer.write().await;
    viewer.set_query(params.into_query());
    Json(ViewResponse::from_viewer(&viewer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, ViewerConfig};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config {
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
        })
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> ViewResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    const LISTINGS: &str = r#"[
        {"Title": "Backend", "Posted": "3 hours ago", "Level": "Senior", "Type": "Full-time", "Skill": ["Rust"]},
        {"Title": "Frontend", "Posted": "20 minutes ago", "Level": "Junior", "Type": "Contract", "Skill": "TypeScript"}
    ]"#;

    #[tokio::test]
    async fn test_load_then_filter() {
        let state = test_state();

        let loaded = send(
            router(state.clone()),
            Method::POST,
            "/api/jobs/load?file=jobs.json",
            LISTINGS,
        )
        .await;
        assert_eq!(loaded.error, None);
        assert_eq!(loaded.count, 2);
        assert!(loaded.list_html.contains("<h3>Backend</h3>"));
        assert!(loaded.list_html.contains("Posted: 180 minutes ago"));
        assert!(loaded.options.skills_html.contains("TypeScript"));

        let filtered = send(
            router(state.clone()),
            Method::GET,
            "/api/jobs?level=Junior&type=&skill=&sort_title=&sort_posted=",
            "",
        )
        .await;
        assert_eq!(filtered.count, 1);
        assert!(filtered.list_html.contains("<h3>Frontend</h3>"));
        assert!(filtered
            .options
            .levels_html
            .contains("<option value=\"Junior\" selected>"));
    }

    #[tokio::test]
    async fn test_posted_sort_over_http() {
        let state = test_state();
        send(router(state.clone()), Method::POST, "/api/jobs/load?file=a.json", LISTINGS).await;

        let sorted = send(
            router(state),
            Method::GET,
            "/api/jobs?sort_title=asc&sort_posted=newest",
            "",
        )
        .await;
        let frontend = sorted.list_html.find("Frontend").unwrap();
        let backend = sorted.list_html.find("Backend").unwrap();
        assert!(frontend < backend);
    }

    #[tokio::test]
    async fn test_no_match_placeholder() {
        let state = test_state();
        send(router(state.clone()), Method::POST, "/api/jobs/load?file=a.json", LISTINGS).await;

        let view = send(router(state), Method::GET, "/api/jobs?skill=COBOL", "").await;
        assert_eq!(view.count, 0);
        assert_eq!(view.list_html, "<p>No jobs match the current filters.</p>");
    }

    #[tokio::test]
    async fn test_object_root_is_an_error() {
        let state = test_state();
        let view = send(
            router(state),
            Method::POST,
            "/api/jobs/load?file=a.json",
            r#"{"Title": "x"}"#,
        )
        .await;

        assert!(view.error.unwrap().contains("Invalid JSON format"));
        assert_eq!(view.list_html, "");
    }

    #[tokio::test]
    async fn test_missing_file_and_read_error() {
        let state = test_state();

        let missing = send(router(state.clone()), Method::POST, "/api/jobs/load", "").await;
        assert_eq!(missing.error.as_deref(), Some("Please select a JSON file first."));

        let unreadable = send(
            router(state),
            Method::POST,
            "/api/jobs/load?file=a.json&read_error=true",
            "",
        )
        .await;
        assert_eq!(unreadable.error.as_deref(), Some("Error reading file."));
    }

    #[tokio::test]
    async fn test_large_file_is_accepted() {
        let record = format!(
            r#"{{"Title": "Engineer", "Posted": "5 minutes ago", "Level": "Senior", "Type": "Full-time", "Skill": ["Rust"], "Detail": "{}"}}"#,
            "x".repeat(120)
        );
        let body = format!("[{}]", vec![record; 20_000].join(","));
        assert!(body.len() > 2 * 1024 * 1024);

        let state = test_state();
        let loaded = send(
            router(state.clone()),
            Method::POST,
            "/api/jobs/load?file=big.json",
            &body,
        )
        .await;

        assert_eq!(loaded.error, None);
        assert_eq!(loaded.count, 20_000);
        assert_eq!(state.viewer.read().await.jobs().len(), 20_000);
    }

    #[test]
    fn test_unknown_directive_is_unset() {
        let query = ViewParams {
            sort_title: Some("sideways".into()),
            sort_posted: Some("oldest".into()),
            ..Default::default()
        }
        .into_query();
        assert_eq!(query.title_sort, None);
        assert_eq!(query.posted_sort, Some(PostedSort::Oldest));
    }
}
