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

//! The immutable soil layer value type, physical constants, and eager
//! stack validation.
//!
//! A `SoilLayer` carries the three parameters the pressure model consumes
//! (friction angle, unit weight, thickness) plus a display label. Layers are
//! plain values: the coefficient derivation lives in `rankine-pressure` as a
//! free function, and searches reorder references rather than mutating or
//! copying layers.

use crate::{
    error::{LayerConstraint, ModelError},
    index::LayerIndex,
    num::PressureScalar,
};
use serde::{Deserialize, Serialize};

/// The unit weight of water in kN/m³.
///
/// Fixed by the model contract: below a configured water table, the
/// effective unit weight of a layer is its unit weight minus this constant.
pub const GAMMA_W: f64 = 9.81;

/// Returns the unit weight of water lifted into the scalar type `T`.
#[inline]
pub fn water_unit_weight<T: PressureScalar>() -> T {
    T::from_f64(GAMMA_W).expect("the unit weight of water is representable in any float type")
}

/// An immutable soil layer.
///
/// Units follow the geotechnical convention used throughout the workspace:
/// degrees for the friction angle, kN/m³ for the unit weight, meters for the
/// thickness. The name is a label only and has no effect on computation.
///
/// # Examples
///
/// ```rust
/// use rankine_model::layer::SoilLayer;
///
/// let layer = SoilLayer::new(30.0, 18.0, 3.0, "Dense sand");
/// assert_eq!(layer.friction_angle_deg(), 30.0);
/// assert_eq!(layer.unit_weight(), 18.0);
/// assert_eq!(layer.thickness(), 3.0);
/// assert_eq!(layer.name(), "Dense sand");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer<T> {
    friction_angle_deg: T,
    unit_weight: T,
    thickness: T,
    name: String,
}

impl<T> SoilLayer<T>
where
    T: PressureScalar,
{
    /// Constructs a new `SoilLayer`.
    ///
    /// Construction does not validate the parameters; validation is a
    /// separate, eager step (`validate_layers`) run before any evaluation so
    /// that a bad layer is reported with its position and the violated
    /// constraint instead of failing mid-integration.
    #[inline]
    pub fn new(friction_angle_deg: T, unit_weight: T, thickness: T, name: impl Into<String>) -> Self {
        Self {
            friction_angle_deg,
            unit_weight,
            thickness,
            name: name.into(),
        }
    }

    /// Returns the internal friction angle φ in degrees.
    #[inline]
    pub fn friction_angle_deg(&self) -> T {
        self.friction_angle_deg
    }

    /// Returns the unit weight γ in kN/m³.
    #[inline]
    pub fn unit_weight(&self) -> T {
        self.unit_weight
    }

    /// Returns the layer thickness in meters.
    #[inline]
    pub fn thickness(&self) -> T {
        self.thickness
    }

    /// Returns the display label of the layer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks this layer against the model's input constraints.
    ///
    /// The constraints are: thickness > 0, unit weight > 0, and friction
    /// angle inside (0°, 180°). The practical range for real soils is
    /// (0°, 90°); φ = 90° is accepted and yields a zero active coefficient.
    ///
    /// `index` identifies the layer's position in the caller's input and is
    /// only used to build a descriptive error.
    pub fn validate(&self, index: LayerIndex) -> Result<(), ModelError> {
        let constraint = if !(self.thickness > T::zero()) {
            Some(LayerConstraint::NonPositiveThickness)
        } else if !(self.unit_weight > T::zero()) {
            Some(LayerConstraint::NonPositiveUnitWeight)
        } else if !(self.friction_angle_deg > T::zero())
            || !(self.friction_angle_deg < upper_friction_angle_bound::<T>())
        {
            Some(LayerConstraint::FrictionAngleOutOfRange)
        } else {
            None
        };

        match constraint {
            Some(constraint) => Err(ModelError::InvalidLayer {
                index,
                name: self.name.clone(),
                constraint,
            }),
            None => Ok(()),
        }
    }
}

// NaN comparisons are false either way, so the negated `>` form above also
// rejects NaN parameters.
#[inline]
fn upper_friction_angle_bound<T: PressureScalar>() -> T {
    T::from_f64(180.0).expect("180 is representable in any float type")
}

impl<T> std::fmt::Display for SoilLayer<T>
where
    T: PressureScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (φ = {}°, γ = {} kN/m³, t = {} m)",
            self.name, self.friction_angle_deg, self.unit_weight, self.thickness
        )
    }
}

/// Validates every layer of a stack, eagerly and in input order.
///
/// Returns the first violation found, identifying the offending layer by
/// index and name. An empty stack is valid (it yields an empty profile and
/// zero force downstream).
///
/// # Examples
///
/// ```rust
/// use rankine_model::layer::{validate_layers, SoilLayer};
///
/// let layers = vec![
///     SoilLayer::new(30.0, 18.0, 2.0, "Sand"),
///     SoilLayer::new(25.0, 17.0, 3.0, "Silt"),
/// ];
/// assert!(validate_layers(&layers).is_ok());
///
/// let bad = vec![SoilLayer::new(30.0, 18.0, -1.0, "Sand")];
/// assert!(validate_layers(&bad).is_err());
/// ```
pub fn validate_layers<T: PressureScalar>(layers: &[SoilLayer<T>]) -> Result<(), ModelError> {
    for (position, layer) in layers.iter().enumerate() {
        layer.validate(LayerIndex::new(position))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_layers, water_unit_weight, SoilLayer, GAMMA_W};
    use crate::{error::LayerConstraint, index::LayerIndex, ModelError};

    fn sand() -> SoilLayer<f64> {
        SoilLayer::new(30.0, 18.0, 3.0, "Sand")
    }

    #[test]
    fn water_unit_weight_matches_constant() {
        assert_eq!(water_unit_weight::<f64>(), GAMMA_W);
        assert_eq!(water_unit_weight::<f32>(), GAMMA_W as f32);
    }

    #[test]
    fn valid_layer_passes() {
        assert!(sand().validate(LayerIndex::new(0)).is_ok());
    }

    #[test]
    fn non_positive_thickness_is_rejected() {
        for thickness in [0.0, -2.5] {
            let layer = SoilLayer::new(30.0, 18.0, thickness, "Sand");
            let err = layer.validate(LayerIndex::new(1)).unwrap_err();
            assert_eq!(
                err,
                ModelError::InvalidLayer {
                    index: LayerIndex::new(1),
                    name: "Sand".to_string(),
                    constraint: LayerConstraint::NonPositiveThickness,
                }
            );
        }
    }

    #[test]
    fn non_positive_unit_weight_is_rejected() {
        let layer = SoilLayer::new(30.0, 0.0, 3.0, "Sand");
        let err = layer.validate(LayerIndex::new(0)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidLayer {
                constraint: LayerConstraint::NonPositiveUnitWeight,
                ..
            }
        ));
    }

    #[test]
    fn friction_angle_bounds() {
        for phi in [0.0, -10.0, 180.0, 250.0, f64::NAN] {
            let layer = SoilLayer::new(phi, 18.0, 3.0, "Sand");
            let err = layer.validate(LayerIndex::new(0)).unwrap_err();
            assert!(matches!(
                err,
                ModelError::InvalidLayer {
                    constraint: LayerConstraint::FrictionAngleOutOfRange,
                    ..
                }
            ));
        }

        // phi = 90° gives Ka = 0, which is allowed.
        let vertical = SoilLayer::new(90.0, 18.0, 3.0, "Sand");
        assert!(vertical.validate(LayerIndex::new(0)).is_ok());
    }

    #[test]
    fn validate_layers_reports_first_offender() {
        let layers = vec![
            sand(),
            SoilLayer::new(25.0, -1.0, 3.0, "Silt"),
            SoilLayer::new(0.0, 18.0, 1.0, "Clay"),
        ];
        let err = validate_layers(&layers).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidLayer {
                index,
                constraint: LayerConstraint::NonPositiveUnitWeight,
                ..
            } if index == LayerIndex::new(1)
        ));
    }

    #[test]
    fn empty_stack_is_valid() {
        let layers: Vec<SoilLayer<f64>> = Vec::new();
        assert!(validate_layers(&layers).is_ok());
    }

    #[test]
    fn display_includes_label_and_units() {
        let rendered = format!("{}", sand());
        assert!(rendered.contains("Sand"));
        assert!(rendered.contains("kN/m³"));
    }
}
