//! cronforge — build and explain five-field cron expressions.
//!
//! Three pure functions form the core: composing five field values into an
//! expression string, explaining an expression in plain English, and
//! interpreting a small fixed set of natural-language scheduling phrases.
//! There is no scheduler and no I/O; every call is synchronous and
//! side-effect free.
//!
//! # Examples
//!
//! ```
//! use cronforge::ScheduleFields;
//!
//! let fields = ScheduleFields::from_phrase("every weekday at 9am").unwrap();
//! assert_eq!(fields.compose(), "0 9 * * 1-5");
//!
//! assert_eq!(cronforge::explain("30 14 * * 1"), "Every Monday at 14:30");
//! ```

pub mod error;
pub mod explain;
pub mod fields;
pub mod parser;
pub mod time;
pub mod weekday;

pub use error::ExpressionError;
pub use fields::ScheduleFields;
pub use time::TimeOfDay;
pub use weekday::Weekday;

// --- ScheduleFields convenience methods ---

impl ScheduleFields {
    /// Parse a natural-language phrase into fields. See [`parser::interpret`].
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        parser::interpret(phrase)
    }

    /// Describe the composed expression in plain English.
    pub fn describe(&self) -> String {
        explain::explain(&self.compose())
    }
}

/// Describe a 5-field cron expression in plain English (best effort).
pub fn explain(expr: &str) -> String {
    explain::explain(expr)
}

/// Interpret a natural-language scheduling phrase into cron fields.
pub fn interpret(phrase: &str) -> Option<ScheduleFields> {
    parser::interpret(phrase)
}
