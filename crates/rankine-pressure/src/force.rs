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

//! The resultant force of an ordered stack.

use crate::profile::pressure_profile;
use rankine_model::{PressureScalar, SoilLayer};

/// Computes the resultant lateral force of an ordered layer stack in kN per
/// linear meter of wall.
///
/// Defined as the trapezoidal integral of `pressure_profile` for the same
/// inputs, using the same left-to-right summation order. A force derived by
/// integrating a profile and a force computed directly through this
/// function are therefore identical bit for bit.
///
/// # Examples
///
/// ```rust
/// use rankine_model::SoilLayer;
/// use rankine_pressure::force::resultant_force;
///
/// // 0.5 * Ka * gamma * t² with Ka ≈ 1/3 gives about 27 kN/m.
/// let layers = vec![SoilLayer::new(30.0, 18.0, 3.0, "Sand")];
/// let force: f64 = resultant_force(&layers, None);
/// assert!((force - 27.0).abs() < 0.1);
/// ```
#[inline]
pub fn resultant_force<'a, T, I>(layers: I, water_table: Option<T>) -> T
where
    T: PressureScalar + 'a,
    I: IntoIterator<Item = &'a SoilLayer<T>>,
{
    pressure_profile(layers, water_table).integrate()
}

#[cfg(test)]
mod tests {
    use super::resultant_force;
    use crate::{coefficient::active_coefficient, profile::pressure_profile};
    use rankine_model::SoilLayer;

    fn layer(phi: f64, gamma: f64, thickness: f64) -> SoilLayer<f64> {
        SoilLayer::new(phi, gamma, thickness, "Layer")
    }

    #[test]
    fn empty_stack_has_zero_force() {
        let layers: Vec<SoilLayer<f64>> = Vec::new();
        assert_eq!(resultant_force(&layers, None), 0.0);
        assert_eq!(resultant_force(&layers, Some(1.0)), 0.0);
    }

    #[test]
    fn single_dry_layer_matches_closed_form() {
        // One trapezoid: force = 0.5 * Ka * gamma * thickness².
        let layers = vec![layer(30.0, 18.0, 3.0)];
        let force = resultant_force(&layers, None);
        let ka = active_coefficient(30.0f64);
        let closed_form = 0.5 * ka * 18.0 * 3.0 * 3.0;
        assert!((force - closed_form).abs() < 1e-9);
        assert!((force - 27.0).abs() < 0.1);
    }

    #[test]
    fn closed_form_holds_across_parameters() {
        for (phi, gamma, thickness) in [
            (20.0, 16.0, 1.0),
            (30.0, 18.0, 3.0),
            (35.0, 21.0, 4.5),
            (45.0, 19.0, 0.5),
        ] {
            let layers = vec![layer(phi, gamma, thickness)];
            let force = resultant_force(&layers, None);
            let closed_form = 0.5 * active_coefficient(phi) * gamma * thickness * thickness;
            assert!(
                (force - closed_form).abs() < 1e-9,
                "mismatch for φ = {phi}°, γ = {gamma}, t = {thickness}"
            );
        }
    }

    #[test]
    fn force_equals_profile_integral_bit_for_bit() {
        let layers = vec![layer(30.0, 18.0, 2.0), layer(25.0, 17.0, 3.0)];
        for gwt in [None, Some(0.0), Some(1.2), Some(2.0), Some(3.7)] {
            let direct = resultant_force(&layers, gwt);
            let via_profile = pressure_profile(&layers, gwt).integrate();
            assert_eq!(direct, via_profile, "paths diverged for gwt = {gwt:?}");
        }
    }

    #[test]
    fn submerged_stack_carries_less_than_heavier_dry_equivalent() {
        // Straddled by the table halfway down, the buoyant lower half must
        // reduce the force relative to the fully dry profile of the same
        // stack whenever gamma_w exceeds the Ka-weighted hydrostatic gain.
        let layers = vec![layer(30.0, 19.0, 5.0)];
        let wet = resultant_force(&layers, Some(2.0));
        let dry = resultant_force(&layers, None);
        assert!(wet < dry);
    }
}
