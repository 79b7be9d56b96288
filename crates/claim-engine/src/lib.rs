//! Core algorithms of the claim-review workspace.
//!
//! Three cooperating subsystems, each recomputed wholesale from data
//! supplied by the external analysis service:
//! - `resolver`: resolves a text selection in the rendered report to the
//!   policy section it should highlight
//! - `calendar`: aggregates plan actions into a date-keyed index and builds
//!   navigable month grids
//! - `numeric`: extracts exact values from locale-formatted numeric strings
//!   for the payout chart
//!
//! Nothing here raises to its caller: malformed input resolves to a defined
//! default (no highlight, a dropped calendar entry, a zero value) because
//! the upstream data is best-effort AI extraction.

pub mod calendar;
pub mod numeric;
pub mod resolver;

pub use calendar::{date_key, month_grid, MonthCursor, TaskIndex};
pub use numeric::{
    chart_geometry, compute_chart_geometry, parse_localized_number, parse_number_with,
    parse_percent, parse_range, NumberLocale,
};
pub use resolver::{resolve_highlight, SectionNode};
