use thiserror::Error;

/// A field that could not be coerced into its typed form.
///
/// `row` is 1-based and counts data rows only (the header is not row 1).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("row {row}: column '{column}' value '{value}' is not a finite number")]
    Measure {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: column '{column}' value '{value}' is not a M/D/YYYY date")]
    Date {
        row: usize,
        column: &'static str,
        value: String,
    },
}
