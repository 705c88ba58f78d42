//! Coefficient normalization and zero-pruned reduction.
//!
//! A transfer-function polynomial arrives as an ordered coefficient list.
//! [`Scaled::normalize`] factors the leading term out as a gain and divides
//! the trailing terms through by it. Terms that are exactly zero are dropped
//! right there, at construction: the surviving terms are compacted into a
//! prefix together with the delay-line index each one multiplies, so the
//! per-sample reduction never loads or multiplies a dead coefficient.
//!
//! Because the builders are `const fn`, a filter declared in a `const` item
//! has all of this resolved during compilation.

use core::fmt;

use crate::delay::DelayLine;
use crate::error::FilterError;

/// Which polynomial of the transfer function a coefficient list describes.
///
/// Carried through rejection diagnostics so a failed build names the list
/// at fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Feedforward polynomial.
    Numerator,
    /// Feedback polynomial.
    Denominator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numerator => f.write_str("numerator"),
            Self::Denominator => f.write_str("denominator"),
        }
    }
}

/// A normalized coefficient list with zero terms compacted away.
///
/// `coeff[k]` multiplies `state[index[k]]`; only the first `len` slots are
/// meaningful. The backing arrays are sized by the delay line, which is
/// always at least as long as the source list, so the whole structure lives
/// on the stack with no allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Scaled<const N: usize> {
    pub(crate) gain: f32,
    coeff: [f32; N],
    index: [usize; N],
    len: usize,
}

impl<const N: usize> Scaled<N> {
    /// Normalize `values` by its leading term.
    ///
    /// The leading term becomes the gain; every trailing term is stored
    /// divided by it, in ascending delay-line order, with exact zeros
    /// omitted. Callers must guarantee `values.len() <= N + 1`.
    pub(crate) const fn normalize(values: &[f32], role: Role) -> Result<Self, FilterError> {
        if values.is_empty() {
            return Err(FilterError::EmptyCoefficients(role));
        }

        let gain = values[0];
        if gain == 0.0 {
            return Err(FilterError::ZeroLeadingCoefficient(role));
        }

        let mut coeff = [0.0; N];
        let mut index = [0usize; N];
        let mut len = 0;

        let mut i = 1;
        while i < values.len() {
            let term = values[i] / gain;
            if term != 0.0 {
                coeff[len] = term;
                index[len] = i - 1;
                len += 1;
            }
            i += 1;
        }

        Ok(Self {
            gain,
            coeff,
            index,
            len,
        })
    }

    /// Sum of `term * state[index]` over the surviving terms.
    ///
    /// Accumulates lowest delay-line index first, so the rounding matches
    /// the plain recurrence evaluated over the full, unpruned list.
    pub(crate) fn reduce(&self, state: &DelayLine<N>) -> f32 {
        let mut acc = 0.0;
        for (&term, &idx) in self.coeff[..self.len].iter().zip(&self.index[..self.len]) {
            acc += term * state[idx];
        }
        acc
    }

    /// Number of trailing terms that survived pruning.
    pub(crate) const fn term_count(&self) -> usize {
        self.len
    }
}
