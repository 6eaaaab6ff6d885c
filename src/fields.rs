use std::fmt;
use std::str::FromStr;

use crate::error::ExpressionError;

/// The five editable cron fields, in canonical order.
///
/// Fields hold raw text: the `*` wildcard, an integer literal, or (for
/// day-of-week) any list/range token. Values are never range-checked here;
/// whatever the caller puts in comes back out of [`compose`](Self::compose).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleFields {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl ScheduleFields {
    pub fn new(
        minute: impl Into<String>,
        hour: impl Into<String>,
        day_of_month: impl Into<String>,
        month: impl Into<String>,
        day_of_week: impl Into<String>,
    ) -> Self {
        Self {
            minute: minute.into(),
            hour: hour.into(),
            day_of_month: day_of_month.into(),
            month: month.into(),
            day_of_week: day_of_week.into(),
        }
    }

    /// Join the five fields into a cron expression with single spaces.
    pub fn compose(&self) -> String {
        self.to_string()
    }

    /// `* * * * *` — fire every minute.
    pub fn every_minute() -> Self {
        Self::new("*", "*", "*", "*", "*")
    }

    /// `0 9 * * *` — every day at 09:00.
    pub fn daily_at_nine() -> Self {
        Self::new("0", "9", "*", "*", "*")
    }

    /// `0 9 * * 1` — every Monday at 09:00.
    pub fn monday_at_nine() -> Self {
        Self::new("0", "9", "*", "*", "1")
    }
}

/// Defaults match a fresh form: midnight daily.
impl Default for ScheduleFields {
    fn default() -> Self {
        Self::new("0", "0", "*", "*", "*")
    }
}

impl fmt::Display for ScheduleFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

impl FromStr for ScheduleFields {
    type Err = ExpressionError;

    /// Split a 5-token cron expression back into fields. Tokens are taken
    /// as-is; only the count is checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(ExpressionError::field_count(fields.len()));
        }
        Ok(Self::new(
            fields[0], fields[1], fields[2], fields[3], fields[4],
        ))
    }
}
