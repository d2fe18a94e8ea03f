use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Degenerate leading coefficients and negative discriminants inside the
/// extremum solver are recovered locally and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A curve was given a control point count outside 2..=4. Construction
    /// aborts instead of guessing a degree.
    #[error("invalid number of control points: {0} (expected 2, 3 or 4)")]
    InvalidPointCount(usize),
}

/// Errors from parsing a plain-text project record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("project record is missing the {0} line")]
    MissingLine(&'static str),

    #[error("malformed coordinate pair '{pair}' on line {line}")]
    MalformedPair { line: usize, pair: String },
}
