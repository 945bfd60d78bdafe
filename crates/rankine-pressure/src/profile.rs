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

//! Construction of the pressure-vs-depth profile for an ordered stack.
//!
//! The walk proceeds top to bottom, accumulating depth. Relative to a
//! configured water table, each layer falls into exactly one of three
//! regimes:
//!
//! * entirely above the table (`bottom <= gwt`): dry, the full unit weight
//!   applies throughout;
//! * straddling the table (`top < gwt < bottom`): dry down to the table,
//!   then buoyant soil weight plus the hydrostatic increment below it —
//!   this layer contributes an extra breakpoint exactly at `gwt`;
//! * entirely below the table (`top >= gwt`): the submerged unit weight
//!   `γ − γw` applies, plus the hydrostatic term `γw·(d − gwt)`.
//!
//! The closed boundaries matter: `bottom == gwt` is the dry regime and
//! `top == gwt` is the submerged one. The regime switch inside a straddling
//! layer shares a single breakpoint at `gwt`, so the profile is continuous
//! at the switch point by construction.

use crate::coefficient::active_coefficient;
use rankine_model::{
    layer::water_unit_weight, PressureBreakpoint, PressureProfile, PressureScalar, SoilLayer,
};

/// Computes the piecewise-linear lateral pressure profile of an ordered
/// layer stack against a retaining structure.
///
/// `water_table` is the depth of the groundwater table below the surface,
/// or `None` for a dry stack. Layers must already have passed
/// `rankine_model::validate_layers`; the walk assumes positive thicknesses.
///
/// Every layer contributes breakpoints at its top and bottom; a layer
/// strictly straddling the water table contributes a third breakpoint at
/// exactly the table depth. An empty stack yields an empty profile.
///
/// # Examples
///
/// ```rust
/// use rankine_model::SoilLayer;
/// use rankine_pressure::profile::pressure_profile;
///
/// let layers = vec![SoilLayer::new(30.0, 19.0, 5.0, "Sand")];
/// let profile = pressure_profile(&layers, Some(2.0));
///
/// // The water table at 2 m splits the single layer into three breakpoints.
/// let depths: Vec<f64> = profile.breakpoints().iter().map(|bp| bp.depth).collect();
/// assert_eq!(depths, vec![0.0, 2.0, 5.0]);
/// ```
pub fn pressure_profile<'a, T, I>(layers: I, water_table: Option<T>) -> PressureProfile<T>
where
    T: PressureScalar + 'a,
    I: IntoIterator<Item = &'a SoilLayer<T>>,
{
    let gamma_w = water_unit_weight::<T>();
    let mut breakpoints = Vec::new();
    let mut depth = T::zero();

    for layer in layers {
        debug_assert!(
            layer.thickness() > T::zero(),
            "called `pressure_profile` with a non-positive layer thickness; \
             validate the stack before evaluation"
        );

        let ka = active_coefficient(layer.friction_angle_deg());
        let gamma = layer.unit_weight();
        let top = depth;
        let bottom = depth + layer.thickness();

        match water_table {
            // Straddling: dry weight down to the table, buoyant weight plus
            // the hydrostatic increment from the table to the bottom.
            Some(gwt) if top < gwt && gwt < bottom => {
                let gamma_eff = gamma - gamma_w;
                breakpoints.push(PressureBreakpoint::new(top, ka * gamma * top));
                breakpoints.push(PressureBreakpoint::new(gwt, ka * gamma * gwt));
                breakpoints.push(PressureBreakpoint::new(
                    bottom,
                    ka * (gamma_eff * bottom + gamma_w * (bottom - gwt)),
                ));
            }
            // Entirely below the table (top == gwt included).
            Some(gwt) if top >= gwt => {
                let gamma_eff = gamma - gamma_w;
                let pressure_at = |d: T| ka * (gamma_eff * d + gamma_w * (d - gwt));
                breakpoints.push(PressureBreakpoint::new(top, pressure_at(top)));
                breakpoints.push(PressureBreakpoint::new(bottom, pressure_at(bottom)));
            }
            // Dry: no table configured, or the layer sits entirely above it
            // (bottom == gwt included).
            _ => {
                breakpoints.push(PressureBreakpoint::new(top, ka * gamma * top));
                breakpoints.push(PressureBreakpoint::new(bottom, ka * gamma * bottom));
            }
        }

        depth = bottom;
    }

    PressureProfile::new(breakpoints)
}
