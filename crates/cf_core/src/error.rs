use thiserror::Error;

/// Errors from the stateful layout surface.
///
/// The pure geometry and catalog functions never fail: absence is
/// expressed as `Option`/empty results, and degenerate geometry (a point
/// coincident with the centre) has defined behavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("no fielder at index {index} (layout holds {count})")]
    UnknownFielder { index: usize, count: usize },
}
