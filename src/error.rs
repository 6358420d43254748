//! Domain errors raised by the parametric optimization layer.
//!
//! The negative-cycle finder itself never fails: malformed input is
//! prevented at the graph boundary. The only propagated failure in this
//! crate is a [`ParametricAPI`](crate::parametric::ParametricAPI) adapter
//! that cannot compute a break-even ratio for a cycle it was handed.

use thiserror::Error;

/// Raised by [`ParametricAPI::zero_cancel`](crate::parametric::ParametricAPI::zero_cancel)
/// when a cycle has no well-defined break-even ratio.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ZeroCancelError {
    /// The cycle's denominator (e.g. total `time`) is zero, so `cost / time`
    /// is undefined.
    #[error("cycle has a zero denominator; its break-even ratio is undefined")]
    ZeroDenominator,
}
