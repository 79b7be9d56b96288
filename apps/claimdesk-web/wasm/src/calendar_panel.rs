//! Calendar panel state for the suggested-plan schedule view.

use chrono::Datelike;
use claim_engine::{date_key, MonthCursor, TaskIndex};
use serde::Serialize;
use shared_types::{ActionItem, ActionPlan};
use wasm_bindgen::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One cell of the 7-column month grid, as the view renders it.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    /// `YYYY-MM-DD`, or `None` for a leading padding cell.
    pub date: Option<String>,
    /// Day of month for the cell label.
    pub day: Option<u32>,
    pub has_tasks: bool,
    pub selected: bool,
}

/// Month view over the current suggestion plan.
///
/// Holds the month cursor plus the task index, which is rebuilt wholesale
/// whenever a new plan arrives. Grid and task lists cross the JS boundary
/// as structured values.
#[wasm_bindgen]
pub struct CalendarPanel {
    cursor: MonthCursor,
    tasks: TaskIndex,
}

impl CalendarPanel {
    pub fn with_month(year: i32, month0: u32) -> Self {
        Self {
            cursor: MonthCursor::new(year, month0),
            tasks: TaskIndex::default(),
        }
    }

    /// Replace the task index with one built from `plan`.
    pub fn set_plan(&mut self, plan: &ActionPlan) {
        self.tasks = TaskIndex::build(plan);
    }

    pub fn clear_plan(&mut self) {
        self.tasks = TaskIndex::default();
    }

    pub fn grid_cells(&self) -> Vec<GridCell> {
        self.cursor
            .grid()
            .into_iter()
            .map(|cell| match cell {
                Some(date) => GridCell {
                    date: Some(date.format(DATE_FORMAT).to_string()),
                    day: Some(date.day()),
                    has_tasks: self.tasks.has_tasks(date),
                    selected: self.cursor.selected() == Some(date),
                },
                None => GridCell {
                    date: None,
                    day: None,
                    has_tasks: false,
                    selected: false,
                },
            })
            .collect()
    }

    /// Tasks for the selected day, in plan order. Empty when nothing is
    /// selected or the day is free.
    pub fn tasks_for_selected(&self) -> &[ActionItem] {
        match self.cursor.selected() {
            Some(day) => self.tasks.tasks_for(day),
            None => &[],
        }
    }
}

// WASM bindings
#[wasm_bindgen]
impl CalendarPanel {
    #[wasm_bindgen(constructor)]
    pub fn new(year: i32, month0: u32) -> CalendarPanel {
        console_error_panic_hook::set_once();
        Self::with_month(year, month0)
    }

    #[wasm_bindgen(js_name = setPlan)]
    pub fn set_plan_wasm(&mut self, plan_json: &str) -> Result<(), JsValue> {
        let plan = ActionPlan::from_json(plan_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse plan: {}", e)))?;
        self.set_plan(&plan);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearPlan)]
    pub fn clear_plan_wasm(&mut self) {
        self.clear_plan();
    }

    #[wasm_bindgen(js_name = monthGrid)]
    pub fn month_grid_wasm(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid_cells())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = prevMonth)]
    pub fn prev_month(&mut self) {
        self.cursor.prev_month();
    }

    #[wasm_bindgen(js_name = nextMonth)]
    pub fn next_month(&mut self) {
        self.cursor.next_month();
    }

    #[wasm_bindgen(getter)]
    pub fn year(&self) -> i32 {
        self.cursor.year()
    }

    /// Zero-based month index (January = 0), the view layer's convention.
    #[wasm_bindgen(getter, js_name = monthIndex)]
    pub fn month_index(&self) -> u32 {
        self.cursor.month0()
    }

    /// Select a day by its `YYYY-MM-DD` key. Returns false for a key that
    /// does not name a calendar day.
    #[wasm_bindgen(js_name = selectDay)]
    pub fn select_day(&mut self, date: &str) -> bool {
        match date_key(date) {
            Some(day) => {
                self.cursor.select_day(day);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.cursor.clear_selection();
    }

    #[wasm_bindgen(js_name = selectedDate)]
    pub fn selected_date(&self) -> Option<String> {
        self.cursor
            .selected()
            .map(|day| day.format(DATE_FORMAT).to_string())
    }

    #[wasm_bindgen(js_name = tasksForSelected)]
    pub fn tasks_for_selected_wasm(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.tasks_for_selected())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = tasksForDate)]
    pub fn tasks_for_date_wasm(&self, date: &str) -> Result<JsValue, JsValue> {
        let tasks = match date_key(date) {
            Some(day) => self.tasks.tasks_for(day),
            None => &[],
        };
        serde_wasm_bindgen::to_value(tasks).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of distinct days carrying at least one task.
    #[wasm_bindgen(js_name = taskDayCount)]
    pub fn task_day_count(&self) -> usize {
        self.tasks.day_count()
    }
}
