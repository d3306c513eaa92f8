//! Date filter query parameters
//!
//! The API filters date fields with bracketed operators, e.g.
//! `date[gte]=2024-01-01` or `date[range]=2024-01-01,2024-12-31`.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Comparison operator applied to a date query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilterOperator {
    /// Equal to
    Eq,
    /// Not equal to
    NotEq,
    /// Greater than
    Gt,
    /// Greater than or equal to
    Gte,
    /// Less than
    Lt,
    /// Less than or equal to
    Lte,
    /// Between two dates, both bounds required
    Range,
}

impl DateFilterOperator {
    /// Every operator, in wire order
    pub const ALL: [DateFilterOperator; 7] = [
        DateFilterOperator::Eq,
        DateFilterOperator::NotEq,
        DateFilterOperator::Gt,
        DateFilterOperator::Gte,
        DateFilterOperator::Lt,
        DateFilterOperator::Lte,
        DateFilterOperator::Range,
    ];

    /// Wire form used inside the brackets of the query key
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilterOperator::Eq => "eq",
            DateFilterOperator::NotEq => "not_eq",
            DateFilterOperator::Gt => "gt",
            DateFilterOperator::Gte => "gte",
            DateFilterOperator::Lt => "lt",
            DateFilterOperator::Lte => "lte",
            DateFilterOperator::Range => "range",
        }
    }

    /// Whether the operator needs an end bound as well as a start bound
    #[must_use]
    pub fn requires_end(&self) -> bool {
        matches!(self, DateFilterOperator::Range)
    }
}

impl fmt::Display for DateFilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilterOperator {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        DateFilterOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == needle)
            .ok_or_else(|| AppError::Configuration(format!("unknown date filter operator: {s}")))
    }
}

/// A validated date filter on a single query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateFilter {
    parameter: String,
    operator: DateFilterOperator,
    start: String,
    end: Option<String>,
}

impl DateFilter {
    /// Builds a filter from loose arguments
    ///
    /// Checks run in order: the operator must be present, then `range` needs
    /// both bounds while every other operator needs `start`. Empty strings
    /// count as missing. For operators other than `range` the `end` bound is
    /// ignored.
    ///
    /// # Errors
    /// Returns `AppError::Configuration` when the operator or a required bound is missing
    pub fn new(
        parameter: impl Into<String>,
        operator: Option<DateFilterOperator>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, AppError> {
        let parameter = parameter.into();
        let Some(operator) = operator else {
            return Err(AppError::Configuration(format!(
                "Operator is required for date filtering on {parameter}"
            )));
        };

        let start = start.filter(|s| !s.is_empty());
        let end = end.filter(|s| !s.is_empty());

        if operator.requires_end() {
            let (Some(start), Some(end)) = (start, end) else {
                return Err(AppError::Configuration(
                    "Range operator requires both a start and an end date".to_string(),
                ));
            };
            return Ok(Self {
                parameter,
                operator,
                start: start.to_string(),
                end: Some(end.to_string()),
            });
        }

        let Some(start) = start else {
            return Err(AppError::Configuration(format!(
                "Operator {operator} requires a start date"
            )));
        };

        Ok(Self {
            parameter,
            operator,
            start: start.to_string(),
            end: None,
        })
    }

    /// Single-bound filter, e.g. `date[gte]=2024-01-01`
    ///
    /// # Errors
    /// Fails for `Range` (which needs two bounds) and for an empty `start`
    pub fn on(
        parameter: impl Into<String>,
        operator: DateFilterOperator,
        start: &str,
    ) -> Result<Self, AppError> {
        Self::new(parameter, Some(operator), Some(start), None)
    }

    /// Range filter, e.g. `date[range]=2024-01-01,2024-12-31`
    ///
    /// # Errors
    /// Fails when either bound is empty
    pub fn range(parameter: impl Into<String>, start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(parameter, Some(DateFilterOperator::Range), Some(start), Some(end))
    }

    /// Single-bound filter on a calendar date
    ///
    /// # Errors
    /// Fails for `Range`
    pub fn on_date(
        parameter: impl Into<String>,
        operator: DateFilterOperator,
        date: NaiveDate,
    ) -> Result<Self, AppError> {
        Self::on(parameter, operator, &date.format(DATE_FORMAT).to_string())
    }

    /// Range filter between two calendar dates
    pub fn between(parameter: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            parameter: parameter.into(),
            operator: DateFilterOperator::Range,
            start: start.format(DATE_FORMAT).to_string(),
            end: Some(end.format(DATE_FORMAT).to_string()),
        }
    }

    /// Renders the filter as a `parameter[operator]` / value query pair
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        let key = format!("{}[{}]", self.parameter, self.operator);
        let value = match (&self.operator, &self.end) {
            (DateFilterOperator::Range, Some(end)) => format!("{},{}", self.start, end),
            _ => self.start.clone(),
        };
        (key, value)
    }

    /// Name of the filtered query parameter
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Operator of the filter
    pub fn operator(&self) -> DateFilterOperator {
        self.operator
    }

    /// Start bound
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End bound, only set for `Range`
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.query_pair();
        write!(f, "{key}={value}")
    }
}
