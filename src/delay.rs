//! Fixed-length shared history buffer.

use core::ops::Index;

/// Delay line of the Direct Form II structure.
///
/// Holds the last `N` intermediate residuals, index 0 most recent. A single
/// buffer feeds both the feedforward and the feedback reduction; that
/// sharing is what makes the realization Direct Form II rather than two
/// independent histories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayLine<const N: usize> {
    entries: [f32; N],
}

impl<const N: usize> DelayLine<N> {
    /// A delay line with every entry zeroed.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: [0.0; N] }
    }

    /// Shift every entry one slot toward higher indices and store `value`
    /// at index 0. The oldest entry falls off the end. Runs in O(N).
    pub fn update(&mut self, value: f32) {
        for i in (1..N).rev() {
            self.entries[i] = self.entries[i - 1];
        }
        if N > 0 {
            self.entries[0] = value;
        }
    }

    /// Zero every entry, as if no samples had been seen.
    pub fn reset(&mut self) {
        self.entries = [0.0; N];
    }

    /// Number of history entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the delay line holds no history at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for DelayLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for DelayLine<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.entries[index]
    }
}
