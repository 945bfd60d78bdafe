// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The layer-count ceiling and the size of the search space.

use crate::error::SearchError;

/// The default maximum number of layers accepted for exhaustive search.
///
/// `10! = 3,628,800` orderings evaluate in well under a second; each extra
/// layer multiplies the work by the new count, so `12` layers already mean
/// almost half a billion evaluations.
pub const DEFAULT_MAX_LAYERS: usize = 10;

/// Limits applied before a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// The maximum accepted layer count, or `None` for no ceiling.
    max_layers: Option<usize>,
}

impl SearchLimits {
    /// Creates limits with the given layer-count ceiling.
    #[inline]
    pub fn with_max_layers(max_layers: usize) -> Self {
        Self {
            max_layers: Some(max_layers),
        }
    }

    /// Creates limits without a layer-count ceiling.
    ///
    /// The caller takes responsibility for the factorial run time.
    #[inline]
    pub fn unbounded() -> Self {
        Self { max_layers: None }
    }

    /// Returns the configured ceiling, if any.
    #[inline]
    pub fn max_layers(&self) -> Option<usize> {
        self.max_layers
    }

    /// Checks a stack size against the ceiling.
    ///
    /// Called once per search, before any permutation is enumerated.
    pub fn check(&self, num_layers: usize) -> Result<(), SearchError> {
        match self.max_layers {
            Some(limit) if num_layers > limit => Err(SearchError::OversizedSearch {
                num_layers,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for SearchLimits {
    /// The default ceiling is [`DEFAULT_MAX_LAYERS`].
    fn default() -> Self {
        Self::with_max_layers(DEFAULT_MAX_LAYERS)
    }
}

/// The size of the exhaustive search space for a given layer count.
///
/// The space of an `n`-layer stack has `n!` orderings. Factorials overflow
/// fixed-width integers quickly (`21!` exceeds `u64`), so the size is
/// stored as its base-10 logarithm and only materialized as an exact count
/// when it fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSpace {
    num_layers: usize,
    /// `log10(n!)`, accumulated as a running sum of `log10(k)`.
    log_val: f64,
}

impl SearchSpace {
    /// Computes the search-space size for `num_layers` layers.
    pub fn new(num_layers: usize) -> Self {
        // log10(0!) = log10(1!) = 0.
        let log_val = (2..=num_layers).map(|k| (k as f64).log10()).sum();
        Self {
            num_layers,
            log_val,
        }
    }

    /// Returns the layer count this space was computed for.
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.num_layers
    }

    /// Returns `log10(n!)`.
    #[inline]
    pub fn log10(&self) -> f64 {
        self.log_val
    }

    /// Returns the exact ordering count, or `None` when `n!` overflows
    /// `u128` (first at `n = 35`).
    pub fn count(&self) -> Option<u128> {
        let mut count: u128 = 1;
        for k in 2..=self.num_layers {
            count = count.checked_mul(k as u128)?;
        }
        Some(count)
    }

    /// Returns the order of magnitude, e.g. `6` for `10! ≈ 3.6 × 10^6`.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the coefficient, e.g. `3.6` for `10! ≈ 3.6 × 10^6`.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        10.0_f64.powf(self.log_val - self.log_val.floor())
    }
}

impl std::fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} layers, {:.2} × 10^{} orderings",
            self.num_layers,
            self.mantissa(),
            self.exponent()
        )
    }
}
