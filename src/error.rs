use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by model validation and store queries.
///
/// Draw-engine guard failures (empty roster, spin already in flight) are
/// deliberately *not* errors; they are silent no-ops signalled by a `false`
/// or `None` return, since no state is ever touched on a rejected request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
