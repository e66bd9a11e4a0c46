use thiserror::Error;

/// Error indicating that a geometric query was given a non-finite input coordinate.
///
/// The unchecked query functions of this crate are total over finite coordinates: degenerate
/// shapes (zero-length segments, zero-area triangles) are absorbed by the branch logic of the
/// algorithms and never produce an error. NaN or infinite coordinates, however, leave the
/// results unspecified. The `try_` query variants validate every input coordinate and return
/// this error instead of computing with non-finite values.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("query input contains a non-finite (NaN or infinite) coordinate")]
pub struct NonFiniteInput;
