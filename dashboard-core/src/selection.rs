use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Years offered by the year selector, ascending.
pub const YEARS: RangeInclusive<i32> = 1980..=2023;

/// The report category chosen in the statistics dropdown. Only the two
/// exact option strings are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticsType {
    #[serde(rename = "Yearly Statistics")]
    Yearly,
    #[serde(rename = "Recession Period Statistics")]
    Recession,
}

impl StatisticsType {
    /// Parse the wire string; anything else, placeholders included, is None.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Yearly Statistics" => Some(StatisticsType::Yearly),
            "Recession Period Statistics" => Some(StatisticsType::Recession),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticsType::Yearly => "Yearly Statistics",
            StatisticsType::Recession => "Recession Period Statistics",
        }
    }
}

/// Current values of the two selection controls, as sent with each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub statistics: Option<StatisticsType>,
    pub year: Option<i32>,
}

impl Selection {
    /// Build from raw wire values; unrecognized statistics strings collapse
    /// to unset rather than erroring.
    pub fn from_raw(statistics: Option<&str>, year: Option<i32>) -> Self {
        Selection {
            statistics: statistics.and_then(StatisticsType::from_str),
            year,
        }
    }
}
