/*
SPDX-License-Identifier: MPL-2.0
*/

//! Pseudo-fields.
//!
//! Reserved placeholder names resolved by the engine rather than the
//! caller's data dictionary: `{TODAY}`, `{NOW}`, and `{TIME}`. A field in
//! the data dictionary shadows the pseudo-field of the same name.

use chrono::{Local, NaiveDate, NaiveTime};
use reftpl_core::{DateFormat, ResolveConfig};

/// Resolve a pseudo-field, or `None` when `field` is not reserved.
pub fn resolve_pseudo_field(field: &str, config: &ResolveConfig) -> Option<String> {
    let now = Local::now();
    match field {
        "TODAY" => Some(format_date(now.date_naive(), config.date_format)),
        "NOW" => Some(format!(
            "{} {}",
            format_date(now.date_naive(), config.date_format),
            format_time(now.time())
        )),
        "TIME" => Some(format_time(now.time())),
        _ => None,
    }
}

pub(crate) fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.chrono_pattern()).to_string()
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    #[test]
    fn test_all_date_formats() {
        assert_eq!(format_date(sample(), DateFormat::MonthDayYear), "03/09/2026");
        assert_eq!(
            format_date(sample(), DateFormat::MonthNameDayYear),
            "March 9, 2026"
        );
        assert_eq!(format_date(sample(), DateFormat::DayMonthYear), "09/03/2026");
        assert_eq!(
            format_date(sample(), DateFormat::DayMonthNameYear),
            "9 March 2026"
        );
        assert_eq!(format_date(sample(), DateFormat::YearMonthDay), "2026/03/09");
        assert_eq!(
            format_date(sample(), DateFormat::YearMonthDayDashed),
            "2026-03-09"
        );
    }

    #[test]
    fn test_format_time() {
        let t = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(format_time(t), "2:05 PM");
        let t = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
        assert_eq!(format_time(t), "12:30 AM");
    }

    #[test]
    fn test_unknown_field_is_none() {
        let config = ResolveConfig::default();
        assert_eq!(resolve_pseudo_field("today", &config), None);
        assert_eq!(resolve_pseudo_field("YESTERDAY", &config), None);
    }

    #[test]
    fn test_reserved_fields_resolve() {
        let config = ResolveConfig::default();
        assert!(resolve_pseudo_field("TODAY", &config).is_some());
        assert!(resolve_pseudo_field("NOW", &config).is_some());
        assert!(resolve_pseudo_field("TIME", &config).is_some());
    }
}
