//! The Direct Form II evaluator and its builders.

use crate::coeff::{Role, Scaled};
use crate::delay::DelayLine;
use crate::error::FilterError;

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// A transfer-function filter specialized at construction.
///
/// `N` is the delay-line length and must equal the longer of the two
/// coefficient lists. Both lists are normalized by their leading terms once,
/// the combined gain `b0 / a0` is frozen, and zero coefficients are pruned
/// out of the evaluation path, so [`process`](Self::process) performs only
/// the multiplies that can contribute.
///
/// Instances are self-contained values: clone one (or reuse a `const`
/// definition) to get an independent channel with private state. Mutation
/// happens only through `process` and `reset`; a single instance must be
/// driven sequentially, one logical stream per instance.
///
/// ```
/// use df2_core::DirectForm2;
///
/// const IDENTITY: DirectForm2<1> = DirectForm2::new(&[1.0], &[1.0]);
///
/// let mut filter = IDENTITY;
/// assert_eq!(filter.process(0.5), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DirectForm2<const N: usize> {
    numerator: Scaled<N>,
    denominator: Scaled<N>,
    gain: f32,
    state: DelayLine<N>,
}

impl<const N: usize> DirectForm2<N> {
    /// Validate a specification and assemble a filter.
    ///
    /// This is the sole rejection point: empty lists, a delay line that is
    /// not exactly `max(|numerator|, |denominator|)` entries long, and a
    /// zero leading coefficient in either list are all refused here. A
    /// constructed filter has no remaining error paths.
    ///
    /// This is a `const fn`, so coefficients known only at startup can still
    /// be checked and baked before the sample loop begins. Coefficients
    /// known at compile time should go through [`new`](Self::new) in a
    /// `const` item instead, which turns rejection into a build failure and
    /// lets pruning resolve during compilation.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] naming the offending list or length.
    pub const fn try_new(numerator: &[f32], denominator: &[f32]) -> Result<Self, FilterError> {
        if numerator.is_empty() {
            return Err(FilterError::EmptyCoefficients(Role::Numerator));
        }
        if denominator.is_empty() {
            return Err(FilterError::EmptyCoefficients(Role::Denominator));
        }

        let expected = max(numerator.len(), denominator.len());
        if N != expected {
            return Err(FilterError::StateLength {
                expected,
                actual: N,
            });
        }

        let b = match Scaled::normalize(numerator, Role::Numerator) {
            Ok(scaled) => scaled,
            Err(e) => return Err(e),
        };
        let a = match Scaled::normalize(denominator, Role::Denominator) {
            Ok(scaled) => scaled,
            Err(e) => return Err(e),
        };

        Ok(Self {
            gain: b.gain / a.gain,
            numerator: b,
            denominator: a,
            state: DelayLine::new(),
        })
    }

    /// Assemble a filter, panicking on a malformed specification.
    ///
    /// Evaluated in a `const` item the panic happens during compilation, so
    /// a bad specification can never reach a running program. Prefer
    /// [`try_new`](Self::try_new) when coefficients arrive at runtime.
    ///
    /// # Panics
    ///
    /// On any specification [`try_new`](Self::try_new) would reject.
    #[must_use]
    pub const fn new(numerator: &[f32], denominator: &[f32]) -> Self {
        match Self::try_new(numerator, denominator) {
            Ok(filter) => filter,
            Err(FilterError::EmptyCoefficients(Role::Numerator)) => panic!("empty numerator"),
            Err(FilterError::EmptyCoefficients(Role::Denominator)) => panic!("empty denominator"),
            Err(FilterError::ZeroLeadingCoefficient(_)) => {
                panic!("leading coefficient is zero")
            }
            Err(FilterError::StateLength { .. }) => {
                panic!("delay line length must equal the longer coefficient list")
            }
        }
    }

    /// Process one sample and return the filtered output.
    ///
    /// Both reductions read the pre-update state; the intermediate residual
    /// is committed to the delay line afterwards. No allocation, no
    /// branching on data, cost bounded by the filter order.
    pub fn process(&mut self, sample: f32) -> f32 {
        let v = sample - self.denominator.reduce(&self.state);
        let y = self.gain * (v + self.numerator.reduce(&self.state));
        self.state.update(v);
        y
    }

    /// Process a block of samples in-place.
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear the history, as if no samples had been seen.
    ///
    /// Idempotent. Coefficients and gain are untouched.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Combined gain `b0 / a0`, frozen at construction.
    #[must_use]
    pub const fn gain(&self) -> f32 {
        self.gain
    }

    /// Delay-line length: the longer of the two coefficient lists.
    #[must_use]
    pub const fn state_len(&self) -> usize {
        N
    }

    /// Whether any feedback term survived pruning.
    ///
    /// A denominator whose trailing terms are all zero contributes no
    /// feedback, so such a filter classifies as FIR.
    #[must_use]
    pub const fn is_iir(&self) -> bool {
        self.denominator.term_count() > 0
    }

    /// Whether the filter is purely feedforward.
    #[must_use]
    pub const fn is_fir(&self) -> bool {
        !self.is_iir()
    }
}
