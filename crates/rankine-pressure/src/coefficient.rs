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

//! The Rankine active pressure coefficient.
//!
//! `Ka` is a stateless function of the friction angle, so it lives here as
//! a free function rather than a method on `SoilLayer`.

use rankine_model::PressureScalar;

/// Computes the Rankine active pressure coefficient `Ka` for a friction
/// angle given in degrees:
///
/// `Ka = (1 − sin φ) / (1 + sin φ)`, with φ converted to radians.
///
/// The formula is defined for φ in (0°, 180°); φ = 90° makes the numerator
/// zero (`Ka = 0`, effectively no lateral pressure) and is allowed. Angles
/// outside that range are a caller error rejected by input validation; this
/// function itself relies on the trigonometric identities holding and does
/// not re-check the range.
///
/// # Examples
///
/// ```rust
/// use rankine_pressure::coefficient::active_coefficient;
///
/// let ka = active_coefficient(30.0f64);
/// assert!((ka - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn active_coefficient<T: PressureScalar>(friction_angle_deg: T) -> T {
    let sin_phi = friction_angle_deg.to_radians().sin();
    (T::one() - sin_phi) / (T::one() + sin_phi)
}
