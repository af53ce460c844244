/*
SPDX-License-Identifier: MPL-2.0
*/

//! Resolution configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-call configuration for placeholder resolution.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct ResolveConfig {
    /// Format used when a pseudo-field (`{TODAY}`, `{NOW}`) renders a date.
    pub date_format: DateFormat,
    /// When set, placeholders that resolve neither from the data dictionary
    /// nor from a pseudo-field are left verbatim instead of becoming empty.
    pub strict: bool,
    /// Maximum mapping depth to recurse into; deeper values are returned
    /// unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Supported date renderings for pseudo-fields.
///
/// Serde names are the literal format strings, so configuration files say
/// `date-format: "Month D, YYYY"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "Month D, YYYY")]
    MonthNameDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "DD Month YYYY")]
    DayMonthNameYear,
    #[serde(rename = "YYYY/MM/DD")]
    YearMonthDay,
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDayDashed,
}

impl DateFormat {
    /// All recognized format names, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "MM/DD/YYYY",
        "Month D, YYYY",
        "DD/MM/YYYY",
        "DD Month YYYY",
        "YYYY/MM/DD",
        "YYYY-MM-DD",
    ];

    /// The chrono strftime pattern for this format.
    pub fn chrono_pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::MonthNameDayYear => "%B %-d, %Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::DayMonthNameYear => "%-d %B %Y",
            DateFormat::YearMonthDay => "%Y/%m/%d",
            DateFormat::YearMonthDayDashed => "%Y-%m-%d",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::MonthNameDayYear => "Month D, YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::DayMonthNameYear => "DD Month YYYY",
            DateFormat::YearMonthDay => "YYYY/MM/DD",
            DateFormat::YearMonthDayDashed => "YYYY-MM-DD",
        }
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MM/DD/YYYY" => Ok(DateFormat::MonthDayYear),
            "Month D, YYYY" => Ok(DateFormat::MonthNameDayYear),
            "DD/MM/YYYY" => Ok(DateFormat::DayMonthYear),
            "DD Month YYYY" => Ok(DateFormat::DayMonthNameYear),
            "YYYY/MM/DD" => Ok(DateFormat::YearMonthDay),
            "YYYY-MM-DD" => Ok(DateFormat::YearMonthDayDashed),
            other => Err(format!(
                "unknown date format '{}', expected one of: {}",
                other,
                DateFormat::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
