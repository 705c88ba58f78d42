//! Direct Form II digital filters specialized at build time.
//!
//! A filter is described by the numerator and denominator coefficient lists
//! of its transfer function. Construction normalizes both lists by their
//! leading terms, sizes a shared delay line to the longer list, and drops
//! every coefficient that is exactly zero, so the per-sample recurrence
//! touches only the terms that can contribute. The evaluator itself is a
//! fixed-size value: no heap, no per-sample branching, execution time
//! bounded by the filter order. That makes it suitable for hard-real-time
//! sample loops on small targets; the surrounding transport (framing,
//! handshakes, rate negotiation) is the caller's concern.
//!
//! The crate is `no_std` compatible. Enable the `std` feature for host
//! builds and the integration test suite.
//!
//! # Modules
//!
//! - [`coeff`] - Coefficient normalization and zero-pruned reduction
//! - [`delay`] - Fixed-length shared history buffer
//! - [`filter`] - The `DirectForm2` evaluator and its builders
//! - [`error`] - Specification rejection errors
//!
//! # Examples
//!
//! Coefficients known before the program runs belong in a `const` item:
//! normalization and zero-pruning then happen during compilation, and a
//! malformed specification fails the build.
//!
//! ```
//! use df2_core::DirectForm2;
//!
//! // Second-order Butterworth bandpass, designed offline.
//! const BANDPASS: DirectForm2<3> = DirectForm2::new(
//!     &[0.29289322, 0.0, -0.29289322],
//!     &[1.0, -0.58578644, 0.41421356],
//! );
//!
//! // Each use of the const is an independent instance with its own state.
//! let mut channel = BANDPASS;
//! let y = channel.process(0.25);
//! assert!(y.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod coeff;
pub mod delay;
pub mod error;
pub mod filter;

// Re-export commonly used types
pub use coeff::Role;
pub use delay::DelayLine;
pub use error::FilterError;
pub use filter::DirectForm2;
