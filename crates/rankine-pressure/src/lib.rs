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

//! # Rankine Pressure
//!
//! **The pressure model: Rankine active earth pressure for an ordered stack
//! of soil layers.**
//!
//! Everything in this crate is a pure function of an ordered layer sequence
//! and an optional water-table depth. There is no shared state and no I/O;
//! the same inputs always produce the same profile, which makes each
//! evaluation independently repeatable (and trivially parallelizable for
//! callers that evaluate many candidate orderings).
//!
//! * **`coefficient`**: the active pressure coefficient `Ka` as a free
//!   function of the friction angle.
//! * **`profile`**: top-down construction of the piecewise-linear
//!   pressure-vs-depth profile, including the three-way water-table case
//!   split (layer above, straddling, or below the table).
//! * **`force`**: the trapezoidal resultant force of a stack, defined as
//!   the integral of its profile so the two always agree bit-for-bit.
//!
//! Validation of the layer inputs is the caller's responsibility
//! (`rankine_model::validate_layers`), run once before evaluation. The
//! functions here assume valid layers and document that assumption with
//! debug assertions rather than re-checking per permutation.

pub mod coefficient;
pub mod force;
pub mod profile;

pub use coefficient::active_coefficient;
pub use force::resultant_force;
pub use profile::pressure_profile;
