//! View models for the three dashboard tabs.
//!
//! Every view reads projects through one [`ProjectsQuery`]. A write made
//! from any view invalidates the shared `"projects"` entry, so the other
//! views pick up the change on their next read.

pub mod analytics;
pub mod calendar;
pub mod list;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::ProjectsApi;
use crate::cache::QueryCache;
use crate::error::ClientError;
use crate::model::Project;

pub use analytics::AnalyticsView;
pub use calendar::CalendarView;
pub use list::ListView;

/// Cache key for the project list.
pub const PROJECTS_KEY: &str = "projects";

pub type ProjectsCache = QueryCache<Arc<Vec<Project>>>;

/// Cached access to the project list.
#[derive(Clone)]
pub struct ProjectsQuery {
    api: Arc<ProjectsApi>,
    cache: Arc<ProjectsCache>,
}

impl ProjectsQuery {
    pub fn new(api: Arc<ProjectsApi>, cache: Arc<ProjectsCache>) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &ProjectsApi {
        &self.api
    }

    /// All projects, fetched once and shared until invalidated.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<Project>>, ClientError> {
        self.cache
            .get_or_fetch(PROJECTS_KEY, || async {
                let projects = self.api.get_all().await?;
                tracing::debug!(count = projects.len(), "Fetched projects");
                Ok::<_, ClientError>(Arc::new(projects))
            })
            .await
    }

    pub fn invalidate(&self) {
        self.cache.invalidate(PROJECTS_KEY);
    }
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Calendar,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Calendar, Tab::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "プロジェクト管理",
            Tab::Calendar => "カレンダー表示",
            Tab::Analytics => "分析・集計",
        }
    }
}

/// The three views wired to one client and one cache.
pub struct Dashboard {
    pub list: ListView,
    pub calendar: CalendarView,
    pub analytics: AnalyticsView,
    active: Tab,
}

impl Dashboard {
    /// `today` seeds the calendar's focus date.
    pub fn new(api: ProjectsApi, author: impl Into<String>, today: NaiveDate) -> Self {
        let query = ProjectsQuery::new(Arc::new(api), Arc::new(QueryCache::new()));
        Self {
            list: ListView::new(query.clone(), author),
            calendar: CalendarView::new(query.clone(), today),
            analytics: AnalyticsView::new(query),
            active: Tab::default(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }
}
