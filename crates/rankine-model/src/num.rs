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

//! # Pressure Scalar Trait
//!
//! Unified numeric bounds for the pressure model and search components.
//! `PressureScalar` collects the floating-point capabilities required across
//! the workspace into a single alias, simplifying generic signatures.
//!
//! ## Motivation
//!
//! Depths, unit weights, and pressures are real-valued quantities, but the
//! computation should remain generic over the concrete float width. This
//! trait bundles the necessary bounds (`num_traits::Float` for arithmetic
//! and trigonometry, `FromPrimitive` for physical constants, formatting and
//! thread-safety markers) so every public function can state a single bound.

use num_traits::{Float, FromPrimitive};

/// A trait alias for numeric types usable throughout the pressure model.
///
/// These are usually the primitive float types `f32` and `f64`. The alias
/// requires:
///
/// * `Float` for arithmetic, comparisons, and `sin`/`to_radians`,
/// * `FromPrimitive` so fixed physical constants (e.g. the unit weight of
///   water) can be lifted into the scalar type,
/// * `Debug + Display` for diagnostics,
/// * `Send + Sync` so evaluations can later be distributed across threads.
pub trait PressureScalar:
    Float + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> PressureScalar for T where
    T: Float + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::PressureScalar;

    fn assert_scalar<T: PressureScalar>() {}

    #[test]
    fn primitive_floats_are_scalars() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
    }
}
