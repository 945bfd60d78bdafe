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

//! # Rankine Search
//!
//! **Exhaustive search over layer orderings, minimizing the resultant
//! lateral force.**
//!
//! The search space of an `n`-layer stack is the `n!` permutations of its
//! layers. This crate enumerates that space behind a strategy interface and
//! tracks the best ordering seen so far in an incumbent:
//!
//! * **`strategy`**: the `PermutationStrategy` trait plus the default
//!   `LexicographicPermutations` enumerator. The enumeration scheme hides
//!   behind the trait so smarter schemes can be swapped in without touching
//!   the optimizer loop.
//! * **`incumbent`**: the best-so-far arrangement, replaced only on a
//!   strictly lower force so ties resolve to the first ordering
//!   encountered.
//! * **`limits`**: the layer-count ceiling guarding against factorial
//!   blow-up, and `SearchSpace`, the `n!` size in logarithmic space.
//! * **`stats`**: counters collected during a search run.
//! * **`optimizer`**: `LayerOrderOptimizer`, the loop tying the pieces
//!   together.
//!
//! ## Design Philosophy
//!
//! * **Fail fast.** Inputs are validated once, up front; the permutation
//!   loop then evaluates pure functions without re-checking.
//! * **Deterministic.** Enumeration order is fixed and the incumbent rule
//!   is strict, so the same input always yields the same arrangement.
//! * **Refuse the impossible.** An oversized stack is rejected before any
//!   work is done, never after hours of churning.

pub mod error;
pub mod incumbent;
pub mod limits;
pub mod optimizer;
pub mod stats;
pub mod strategy;

pub use error::SearchError;
pub use incumbent::Incumbent;
pub use limits::{SearchLimits, SearchSpace};
pub use optimizer::{LayerOrderOptimizer, SearchOutcome};
pub use stats::{SearchStatistics, SearchStatisticsBuilder};
pub use strategy::{LexicographicPermutations, PermutationStrategy};
