//! Specification rejection errors.
//!
//! Every error here is raised while a filter is being assembled, before the
//! first sample is processed. Once an instance exists, no fallible path
//! remains: evaluation is plain floating-point arithmetic.

use thiserror::Error;

use crate::coeff::Role;

/// Reasons a filter specification is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterError {
    /// A coefficient list held no entries.
    #[error("empty {0} coefficient list")]
    EmptyCoefficients(Role),

    /// The leading coefficient of a list is zero. Normalization divides
    /// every trailing term by it, so the result would be meaningless.
    #[error("leading {0} coefficient is zero")]
    ZeroLeadingCoefficient(Role),

    /// The delay-line length does not fit the coefficient lists.
    #[error("delay line holds {actual} entries, coefficients need {expected}")]
    StateLength {
        /// Required length: the longer of the two coefficient lists.
        expected: usize,
        /// Length requested through the const parameter.
        actual: usize,
    },
}
