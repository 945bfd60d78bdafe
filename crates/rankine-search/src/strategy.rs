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

//! The ordering-enumeration strategy interface.
//!
//! The optimizer loop does not care how candidate orderings are produced,
//! only that every ordering of the input appears exactly once and that the
//! sequence is deterministic. The enumeration scheme therefore hides behind
//! `PermutationStrategy`, and the default implementation enumerates in
//! lexicographic order.

use rankine_model::LayerIndex;

/// A deterministic enumerator of candidate layer orderings.
///
/// Implementations must yield every permutation of `0..num_layers` exactly
/// once, in a fixed order. Determinism matters beyond reproducibility: the
/// incumbent breaks ties in favor of the first ordering encountered, so the
/// enumeration order is part of the search result for tied inputs.
pub trait PermutationStrategy {
    /// A short human-readable name for logging.
    fn name(&self) -> &str;

    /// Returns an iterator over all orderings of a `num_layers` stack.
    ///
    /// For `num_layers == 0` the iterator yields exactly one ordering, the
    /// empty one, mirroring `0! = 1`.
    fn orderings(&self, num_layers: usize) -> Box<dyn Iterator<Item = Vec<LayerIndex>>>;
}

/// Enumerates permutations in lexicographic order, starting from the
/// identity ordering `[0, 1, ..., n-1]`.
///
/// Successors are computed in place with the classic next-permutation
/// step: find the longest non-increasing suffix, swap its pivot with the
/// rightmost larger element, then reverse the suffix. Each step is `O(n)`
/// and allocates nothing beyond the cloned ordering handed to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicographicPermutations;

impl PermutationStrategy for LexicographicPermutations {
    fn name(&self) -> &str {
        "lexicographic"
    }

    fn orderings(&self, num_layers: usize) -> Box<dyn Iterator<Item = Vec<LayerIndex>>> {
        Box::new(LexicographicIter::new(num_layers))
    }
}

struct LexicographicIter {
    current: Vec<LayerIndex>,
    exhausted: bool,
}

impl LexicographicIter {
    fn new(num_layers: usize) -> Self {
        Self {
            current: (0..num_layers).map(LayerIndex::new).collect(),
            exhausted: false,
        }
    }

    /// Advances `current` to its lexicographic successor. Returns `false`
    /// when `current` is the final (non-increasing) permutation.
    fn advance(&mut self) -> bool {
        let order = &mut self.current;
        if order.len() < 2 {
            return false;
        }

        // Longest non-increasing suffix; `pivot` is the element before it.
        let mut i = order.len() - 1;
        while i > 0 && order[i - 1] >= order[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        let pivot = i - 1;

        // Rightmost element greater than the pivot; it exists because the
        // suffix is non-empty and its first element exceeds the pivot.
        let mut j = order.len() - 1;
        while order[j] <= order[pivot] {
            j -= 1;
        }
        order.swap(pivot, j);
        order[i..].reverse();
        true
    }
}

impl Iterator for LexicographicIter {
    type Item = Vec<LayerIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let ordering = self.current.clone();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::{LexicographicPermutations, PermutationStrategy};

    fn collect(num_layers: usize) -> Vec<Vec<usize>> {
        LexicographicPermutations
            .orderings(num_layers)
            .map(|ordering| ordering.iter().map(|index| index.get()).collect())
            .collect()
    }

    #[test]
    fn zero_layers_yield_the_empty_ordering_once() {
        let orderings = collect(0);
        assert_eq!(orderings, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn one_layer_yields_the_identity_once() {
        assert_eq!(collect(1), vec![vec![0]]);
    }

    #[test]
    fn three_layers_enumerate_in_lexicographic_order() {
        assert_eq!(
            collect(3),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn four_layers_yield_twenty_four_distinct_orderings() {
        let orderings = collect(4);
        assert_eq!(orderings.len(), 24);

        let mut sorted = orderings.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 24, "orderings must be distinct");
        // Already sorted: enumeration is lexicographic.
        assert_eq!(sorted, orderings);
    }

    #[test]
    fn iterator_fuses_after_the_last_permutation() {
        let mut iter = LexicographicPermutations.orderings(2);
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
