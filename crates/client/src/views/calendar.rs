//! Calendar tab: month/week grids of shoot periods.

use chrono::{Datelike, Days, NaiveDate};
use survey_core::status::ProjectStatus;
use survey_core::types::DbId;

use super::ProjectsQuery;
use crate::error::ClientError;
use crate::model::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    #[default]
    Month,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigate {
    Previous,
    Next,
    Today,
}

/// An all-day event spanning a project's shoot dates.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: DbId,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: ProjectStatus,
    pub color: &'static str,
}

impl CalendarEvent {
    /// `None` unless the project has both a start and an end date.
    pub fn from_project(project: &Project) -> Option<Self> {
        let start = project.start_date?.date_naive();
        let end = project.end_date?.date_naive();
        Some(Self {
            id: project.id,
            title: format!("{} - {}", project.company_name, project.site_name),
            start,
            end,
            status: project.status,
            color: project.status.color(),
        })
    }

    fn overlaps(&self, range: &DateRange) -> bool {
        let first = self.start.min(self.end);
        let last = self.start.max(self.end);
        first <= range.end && last >= range.start
    }
}

pub fn to_events(projects: &[Project]) -> Vec<CalendarEvent> {
    projects.iter().filter_map(CalendarEvent::from_project).collect()
}

/// Inclusive range of days shown by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = first_of_month(first_of_month(date) + Days::new(31));
    next_month - Days::new(1)
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Days::new(6)
}

/// Days displayed for `focus`. Weeks start on Sunday; a month grid is
/// padded out to whole weeks.
pub fn visible_range(mode: CalendarMode, focus: NaiveDate) -> DateRange {
    match mode {
        CalendarMode::Week => DateRange {
            start: week_start(focus),
            end: week_end(focus),
        },
        CalendarMode::Month => DateRange {
            start: week_start(first_of_month(focus)),
            end: week_end(last_of_month(focus)),
        },
    }
}

/// New focus date after moving one page in `mode`.
pub fn shift(mode: CalendarMode, focus: NaiveDate, nav: Navigate, today: NaiveDate) -> NaiveDate {
    match (nav, mode) {
        (Navigate::Today, _) => today,
        (Navigate::Previous, CalendarMode::Week) => focus - Days::new(7),
        (Navigate::Next, CalendarMode::Week) => focus + Days::new(7),
        (Navigate::Previous, CalendarMode::Month) => first_of_month(first_of_month(focus) - Days::new(1)),
        (Navigate::Next, CalendarMode::Month) => first_of_month(first_of_month(focus) + Days::new(31)),
    }
}

pub struct CalendarView {
    query: ProjectsQuery,
    mode: CalendarMode,
    focus: NaiveDate,
    today: NaiveDate,
}

impl CalendarView {
    pub fn new(query: ProjectsQuery, today: NaiveDate) -> Self {
        Self {
            query,
            mode: CalendarMode::Month,
            focus: today,
            today,
        }
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CalendarMode) {
        self.mode = mode;
    }

    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    pub fn navigate(&mut self, nav: Navigate) {
        self.focus = shift(self.mode, self.focus, nav, self.today);
    }

    pub fn range(&self) -> DateRange {
        visible_range(self.mode, self.focus)
    }

    /// Events overlapping the visible range, in list order.
    pub async fn visible_events(&self) -> Result<Vec<CalendarEvent>, ClientError> {
        let projects = self.query.fetch_all().await?;
        let range = self.range();
        Ok(to_events(&projects)
            .into_iter()
            .filter(|event| event.overlaps(&range))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: DbId, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Project {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let midnight = |d: NaiveDate| d.and_hms_opt(0, 0, 0).unwrap().and_utc();
        Project {
            id,
            status: ProjectStatus::Scheduled,
            company_name: "タクマ".into(),
            site_name: "新江東".into(),
            equipment: Vec::new(),
            client_contact: None,
            photographer: None,
            shoot_period: None,
            start_date: start.map(midnight),
            end_date: end.map(midnight),
            drawing_model: None,
            remarks: None,
            site_address: None,
            created_at: at,
            updated_at: at,
            created_by: "管理者".into(),
            updated_by: "管理者".into(),
        }
    }

    #[test]
    fn events_need_both_dates() {
        let projects = vec![
            project(1, Some(date(2025, 1, 20)), Some(date(2025, 1, 22))),
            project(2, Some(date(2025, 1, 20)), None),
            project(3, None, Some(date(2025, 1, 22))),
            project(4, None, None),
        ];
        let events = to_events(&projects);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].title, "タクマ - 新江東");
        assert_eq!(events[0].color, "#3b82f6");
        assert_eq!(events[0].start, date(2025, 1, 20));
        assert_eq!(events[0].end, date(2025, 1, 22));
    }

    #[test]
    fn month_grid_is_padded_to_sunday_weeks() {
        // January 2025 starts on a Wednesday and ends on a Friday.
        let range = visible_range(CalendarMode::Month, date(2025, 1, 15));
        assert_eq!(range.start, date(2024, 12, 29));
        assert_eq!(range.end, date(2025, 2, 1));
    }

    #[test]
    fn month_grid_handles_february_of_leap_year() {
        let range = visible_range(CalendarMode::Month, date(2024, 2, 10));
        assert_eq!(range.start, date(2024, 1, 28));
        assert_eq!(range.end, date(2024, 3, 2));
    }

    #[test]
    fn week_range_starts_on_sunday() {
        let range = visible_range(CalendarMode::Week, date(2025, 1, 15));
        assert_eq!(range.start, date(2025, 1, 12));
        assert_eq!(range.end, date(2025, 1, 18));

        let sunday = visible_range(CalendarMode::Week, date(2025, 1, 12));
        assert_eq!(sunday.start, date(2025, 1, 12));
    }

    #[test]
    fn navigation_moves_by_page() {
        let today = date(2025, 3, 1);
        assert_eq!(
            shift(CalendarMode::Month, date(2025, 1, 31), Navigate::Next, today),
            date(2025, 2, 1)
        );
        assert_eq!(
            shift(CalendarMode::Month, date(2025, 1, 15), Navigate::Previous, today),
            date(2024, 12, 1)
        );
        assert_eq!(
            shift(CalendarMode::Week, date(2025, 1, 15), Navigate::Next, today),
            date(2025, 1, 22)
        );
        assert_eq!(
            shift(CalendarMode::Week, date(2025, 1, 15), Navigate::Today, today),
            today
        );
    }

    #[test]
    fn overlap_includes_events_crossing_the_edge() {
        let range = visible_range(CalendarMode::Week, date(2025, 1, 15));
        let inside = CalendarEvent::from_project(&project(1, Some(date(2025, 1, 10)), Some(date(2025, 1, 12)))).unwrap();
        let outside = CalendarEvent::from_project(&project(2, Some(date(2025, 1, 19)), Some(date(2025, 1, 20)))).unwrap();
        let reversed = CalendarEvent::from_project(&project(3, Some(date(2025, 1, 20)), Some(date(2025, 1, 18)))).unwrap();
        assert!(inside.overlaps(&range));
        assert!(!outside.overlaps(&range));
        assert!(reversed.overlaps(&range));
    }
}
