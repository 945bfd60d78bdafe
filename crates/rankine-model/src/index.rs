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

//! # Strongly Typed Layer Indices (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying a soil layer by its
//! position in the caller's input sequence. Orderings produced by the
//! search are vectors of `LayerIndex`, so layer identity stays positional:
//! two layers with identical physical parameters remain distinct entities.
//!
//! The wrapper is `#[repr(transparent)]` and compiles down to a plain
//! `usize` with no runtime overhead.

use serde::{Deserialize, Serialize};

/// A strongly typed index into a sequence of soil layers.
///
/// # Examples
///
/// ```rust
/// use rankine_model::index::LayerIndex;
///
/// let index = LayerIndex::new(2);
/// assert_eq!(index.get(), 2);
/// assert_eq!(format!("{}", index), "2");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerIndex(usize);

impl LayerIndex {
    /// Creates a new `LayerIndex` with the given `usize` position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Checks if the index refers to the first layer.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for LayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LayerIndex({})", self.0)
    }
}

impl std::fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for LayerIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<LayerIndex> for usize {
    fn from(index: LayerIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::LayerIndex;

    #[test]
    fn new_and_get_round_trip() {
        let index = LayerIndex::new(7);
        assert_eq!(index.get(), 7);
        assert_eq!(usize::from(index), 7);
        assert_eq!(LayerIndex::from(7usize), index);
    }

    #[test]
    fn ordering_is_positional() {
        assert!(LayerIndex::new(0) < LayerIndex::new(1));
        assert!(LayerIndex::new(0).is_zero());
        assert!(!LayerIndex::new(3).is_zero());
    }

    #[test]
    fn debug_and_display_formats() {
        let index = LayerIndex::new(4);
        assert_eq!(format!("{:?}", index), "LayerIndex(4)");
        assert_eq!(format!("{}", index), "4");
    }
}
