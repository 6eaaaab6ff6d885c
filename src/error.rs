use std::fmt;

/// Errors produced when splitting a raw cron expression into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExpressionError {
    /// The expression did not split into exactly five fields.
    FieldCount { got: usize },
}

impl ExpressionError {
    pub fn field_count(got: usize) -> Self {
        Self::FieldCount { got }
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { got } => {
                write!(f, "expected 5 cron fields, got {got}")
            }
        }
    }
}

impl std::error::Error for ExpressionError {}
