//! Analytics tab: aggregate counts over the cached project list.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use survey_core::equipment::KNOWN_EQUIPMENT;
use survey_core::status::ProjectStatus;

use super::ProjectsQuery;
use crate::error::ClientError;
use crate::model::Project;

/// Equipment name and the number of projects using it.
pub type EquipmentUsage = (&'static str, usize);

/// Usage of every known equipment name, most used first.
///
/// Names outside [`KNOWN_EQUIPMENT`] are ignored. Equal counts keep
/// master-list order.
pub fn equipment_usage(projects: &[Project]) -> Vec<EquipmentUsage> {
    let mut usage: Vec<EquipmentUsage> = KNOWN_EQUIPMENT.iter().map(|&name| (name, 0)).collect();
    for item in projects.iter().flat_map(|p| &p.equipment) {
        if let Some(entry) = usage.iter_mut().find(|(name, _)| *name == item.as_str()) {
            entry.1 += 1;
        }
    }
    usage.sort_by(|a, b| b.1.cmp(&a.1));
    usage
}

/// Project count for every status, in display order.
pub fn status_counts(projects: &[Project]) -> Vec<(ProjectStatus, usize)> {
    ProjectStatus::ALL
        .iter()
        .map(|&status| (status, projects.iter().filter(|p| p.status == status).count()))
        .collect()
}

/// Calendar month, displayed as `2025年1月`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月", self.year, self.month)
    }
}

/// Projects per start month, oldest first. Projects without a start date
/// are not counted.
pub fn monthly_counts(projects: &[Project]) -> Vec<(YearMonth, usize)> {
    let mut months: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for start in projects.iter().filter_map(|p| p.start_date) {
        let key = YearMonth {
            year: start.year(),
            month: start.month(),
        };
        *months.entry(key).or_default() += 1;
    }
    months.into_iter().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub unquoted: usize,
}

impl Summary {
    pub fn of(projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total: projects.len(),
            completed: count(ProjectStatus::Completed),
            scheduled: count(ProjectStatus::Scheduled),
            unquoted: count(ProjectStatus::Unquoted),
        }
    }
}

/// Everything the analytics tab renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub summary: Summary,
    pub equipment: Vec<EquipmentUsage>,
    pub statuses: Vec<(ProjectStatus, usize)>,
    pub months: Vec<(YearMonth, usize)>,
}

pub fn compute(projects: &[Project]) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        summary: Summary::of(projects),
        equipment: equipment_usage(projects),
        statuses: status_counts(projects),
        months: monthly_counts(projects),
    }
}

pub struct AnalyticsView {
    query: ProjectsQuery,
}

impl AnalyticsView {
    pub fn new(query: ProjectsQuery) -> Self {
        Self { query }
    }

    pub async fn snapshot(&self) -> Result<AnalyticsSnapshot, ClientError> {
        let projects = self.query.fetch_all().await?;
        Ok(compute(&projects))
    }
}
