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

//! # Rankine Solver
//!
//! High-level entry point tying the pressure model and the layer-order
//! search together. Callers that just want answers use this crate alone:
//! validate a stack once, evaluate its pressure profile or resultant force,
//! or search the layer orderings for the minimum-force arrangement.
//!
//! ## Modules
//!
//! - `solver`: `RankineSolver` with a builder for the search limits, plus
//!   `OptimizeOutcome`, which pairs the optimal arrangement with the force
//!   of the ordering as given so the improvement is visible at a glance.
//!
//! The lower-level crates stay usable on their own: `rankine_pressure` for
//! the pure evaluation functions and `rankine_search` for a search with a
//! custom enumeration strategy.

pub mod solver;

pub use solver::{OptimizeOutcome, RankineSolver, RankineSolverBuilder};
