//! Date-keyed task aggregation and month-grid construction.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use shared_types::{ActionItem, ActionPlan};

/// Normalize a due-date string to its calendar day.
///
/// The service emits either a bare `YYYY-MM-DD` or an ISO timestamp; the
/// date key is everything before the first time separator, so both forms
/// land on the same day. Returns `None` for anything that does not parse
/// as a calendar date.
pub fn date_key(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Date-indexed lookup over a plan's action items.
///
/// Rebuilt wholesale whenever a new plan arrives. Actions keep the plan's
/// original order within each day; actions with a missing or malformed due
/// date are dropped so a single bad record cannot blank out the calendar.
#[derive(Debug, Default, Clone)]
pub struct TaskIndex {
    buckets: HashMap<NaiveDate, Vec<ActionItem>>,
}

impl TaskIndex {
    pub fn build(plan: &ActionPlan) -> Self {
        let mut buckets: HashMap<NaiveDate, Vec<ActionItem>> = HashMap::new();
        for action in &plan.actions {
            let Some(day) = action.due_date.as_deref().and_then(date_key) else {
                continue;
            };
            buckets.entry(day).or_default().push(action.clone());
        }
        Self { buckets }
    }

    /// Tasks due on `date`, in plan order. Empty when none.
    pub fn tasks_for(&self, date: NaiveDate) -> &[ActionItem] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_tasks(&self, date: NaiveDate) -> bool {
        self.buckets.contains_key(&date)
    }

    /// Number of distinct days carrying at least one task.
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Build the flat cell sequence for one month: one `None` per weekday
/// before the 1st (Sunday-first columns), then one entry per calendar day.
///
/// `month0` is zero-based (January = 0), matching the view layer this
/// feeds. An out-of-range month yields an empty grid. The caller tiles the
/// result into a fixed 7-column grid.
pub fn month_grid(year: i32, month0: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut grid: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut current = first;
    while current.month() == first.month() {
        grid.push(Some(current));
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    grid
}

/// The month the calendar view is looking at, plus the selected day.
///
/// Navigation rolls year boundaries and always clears the selection — a
/// selected day from a different month is not meaningful once navigated
/// away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
    selected: Option<NaiveDate>,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0.min(11),
            selected: None,
        }
    }

    /// Cursor positioned on the month containing `date`.
    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            selected: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (January = 0).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn prev_month(&mut self) {
        self.selected = None;
        if self.month0 == 0 {
            self.year -= 1;
            self.month0 = 11;
        } else {
            self.month0 -= 1;
        }
    }

    pub fn next_month(&mut self) {
        self.selected = None;
        if self.month0 == 11 {
            self.year += 1;
            self.month0 = 0;
        } else {
            self.month0 += 1;
        }
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        month_grid(self.year, self.month0)
    }
}
