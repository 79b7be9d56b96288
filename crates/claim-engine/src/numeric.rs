//! Locale-formatted numeric extraction for the payout chart.
//!
//! The extraction service emits numbers the way the source documents print
//! them: dot as thousands separator, comma as decimal point, currency and
//! percent suffixes, `min-max` range syntax. Every function here totalizes
//! over malformed input — the chart renders a visible zero rather than
//! crash on bad AI output.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ChartGeometry, PayoutPayload};

lazy_static! {
    /// Everything that is not a digit, separator, or sign.
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.,\-]").unwrap();
}

/// Separator convention for locale-formatted numbers.
///
/// The default pins the extraction service's convention: dot groups
/// thousands, comma marks the decimal. Input that already uses a dotted
/// decimal must be parsed under an explicit locale via
/// [`parse_number_with`]; the crate does not guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub thousands: char,
    pub decimal: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            thousands: '.',
            decimal: ',',
        }
    }
}

/// Parse a locale-formatted numeric string under `locale`.
///
/// `None`, empty, and unparseable input all yield `0.0`. The raw string is
/// first stripped of everything but digits, separators, and signs, then
/// thousands separators are removed and the first decimal separator
/// becomes a `.` before a strict float parse.
pub fn parse_number_with(locale: NumberLocale, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    if raw.trim().is_empty() {
        return 0.0;
    }

    let cleaned = NON_NUMERIC.replace_all(raw, "");
    let standardized: String = cleaned
        .chars()
        .filter(|c| *c != locale.thousands)
        .collect::<String>()
        .replacen(locale.decimal, ".", 1);

    standardized.parse().unwrap_or(0.0)
}

/// Parse under the default dot-thousands/comma-decimal convention.
pub fn parse_localized_number(raw: Option<&str>) -> f64 {
    parse_number_with(NumberLocale::default(), raw)
}

/// Split a `"min-max"` range on its first dash and parse each half.
///
/// Absent input yields `(0.0, 0.0)`; a dash-less string parses as the
/// minimum with a zero maximum.
pub fn parse_range(raw: Option<&str>) -> (f64, f64) {
    let raw = raw.unwrap_or("");
    match raw.split_once('-') {
        Some((lo, hi)) => (
            parse_localized_number(Some(lo)),
            parse_localized_number(Some(hi)),
        ),
        None => (parse_localized_number(Some(raw)), 0.0),
    }
}

/// Parse a percentage string such as `"80%"`. `0.0` on failure.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim().parse().unwrap_or(0.0)
}

/// Place an expected value inside a recommended range.
///
/// A degenerate or inverted range pins the marker to the midpoint instead
/// of dividing by zero, and the final position is clamped to `[0, 100]` so
/// an expected value outside the stated range still renders on-scale.
pub fn compute_chart_geometry(min: f64, max: f64, expected: f64, probability: f64) -> ChartGeometry {
    let total = max - min;
    let mut position = if total > 0.0 {
        (expected - min) / total * 100.0
    } else {
        50.0
    };
    if !position.is_finite() {
        position = 50.0;
    }

    ChartGeometry {
        min,
        max,
        expected,
        expected_position_percent: position.clamp(0.0, 100.0),
        probability,
    }
}

/// Parse a raw payout payload and derive its chart geometry.
pub fn chart_geometry(payload: &PayoutPayload) -> ChartGeometry {
    let (min, max) = parse_range(payload.recommended_range.as_deref());
    let expected = parse_localized_number(payload.expected_value.as_deref());
    let probability = parse_percent(payload.probability_of_success.as_deref());
    compute_chart_geometry(min, max, expected, probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_currency_suffixed_number() {
        assert_eq!(
            parse_localized_number(Some("10.000.000,50 VNĐ")),
            10_000_000.5
        );
    }

    #[test]
    fn test_parses_grouped_integer() {
        assert_eq!(parse_localized_number(Some("10.000.000")), 10_000_000.0);
    }

    #[test]
    fn test_absent_input_is_zero() {
        assert_eq!(parse_localized_number(None), 0.0);
        assert_eq!(parse_localized_number(Some("")), 0.0);
        assert_eq!(parse_localized_number(Some("   ")), 0.0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_localized_number(Some("N/A")), 0.0);
        assert_eq!(parse_localized_number(Some("chưa xác định")), 0.0);
    }

    #[test]
    fn test_explicit_locale_swaps_separators() {
        let us = NumberLocale {
            thousands: ',',
            decimal: '.',
        };
        assert_eq!(parse_number_with(us, Some("10,000.5")), 10_000.5);
    }

    #[test]
    fn test_range_splits_on_first_dash() {
        assert_eq!(
            parse_range(Some("10.000.000-15.000.000")),
            (10_000_000.0, 15_000_000.0)
        );
    }

    #[test]
    fn test_range_defaults() {
        assert_eq!(parse_range(None), (0.0, 0.0));
        assert_eq!(parse_range(Some("")), (0.0, 0.0));
        assert_eq!(parse_range(Some("5.000")), (5_000.0, 0.0));
    }

    #[test]
    fn test_percent_strips_suffix() {
        assert_eq!(parse_percent(Some("80%")), 80.0);
        assert_eq!(parse_percent(Some("80.5%")), 80.5);
        assert_eq!(parse_percent(Some(" 75 % ")), 75.0);
    }

    #[test]
    fn test_percent_defaults_to_zero() {
        assert_eq!(parse_percent(None), 0.0);
        assert_eq!(parse_percent(Some("high")), 0.0);
    }

    #[test]
    fn test_expected_at_midpoint() {
        let geometry = compute_chart_geometry(10_000_000.0, 15_000_000.0, 12_500_000.0, 80.0);
        assert_eq!(geometry.expected_position_percent, 50.0);
    }

    #[test]
    fn test_degenerate_range_pins_midpoint() {
        let geometry = compute_chart_geometry(5_000.0, 5_000.0, 7_000.0, 0.0);
        assert_eq!(geometry.expected_position_percent, 50.0);
        let geometry = compute_chart_geometry(0.0, 0.0, 0.0, 0.0);
        assert_eq!(geometry.expected_position_percent, 50.0);
    }

    #[test]
    fn test_out_of_range_expected_is_clamped() {
        let below = compute_chart_geometry(10_000.0, 20_000.0, 5_000.0, 0.0);
        assert_eq!(below.expected_position_percent, 0.0);

        let above = compute_chart_geometry(10_000.0, 20_000.0, 95_000.0, 0.0);
        assert_eq!(above.expected_position_percent, 100.0);
    }

    #[test]
    fn test_geometry_from_payload() {
        let payload = PayoutPayload {
            expected_value: Some("12.500.000".to_string()),
            recommended_range: Some("10.000.000-15.000.000".to_string()),
            probability_of_success: Some("80%".to_string()),
        };

        let geometry = chart_geometry(&payload);
        assert_eq!(geometry.min, 10_000_000.0);
        assert_eq!(geometry.max, 15_000_000.0);
        assert_eq!(geometry.expected, 12_500_000.0);
        assert_eq!(geometry.expected_position_percent, 50.0);
        assert_eq!(geometry.probability, 80.0);
    }

    #[test]
    fn test_geometry_from_empty_payload() {
        let geometry = chart_geometry(&PayoutPayload::default());
        assert_eq!(geometry.min, 0.0);
        assert_eq!(geometry.max, 0.0);
        assert_eq!(geometry.expected, 0.0);
        assert_eq!(geometry.expected_position_percent, 50.0);
        assert_eq!(geometry.probability, 0.0);
    }
}
