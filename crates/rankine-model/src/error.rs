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

//! Error types for model validation.
//!
//! Validation errors always identify the offending layer by position and
//! label together with the violated constraint, so a presentation layer can
//! point the user at the exact input row.

use crate::index::LayerIndex;
use thiserror::Error;

/// The input constraint a layer violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayerConstraint {
    /// The layer thickness must be strictly positive (meters).
    #[error("thickness must be positive")]
    NonPositiveThickness,
    /// The unit weight must be strictly positive (kN/m³).
    #[error("unit weight must be positive")]
    NonPositiveUnitWeight,
    /// The friction angle must lie strictly inside (0°, 180°).
    #[error("friction angle must lie inside (0°, 180°)")]
    FrictionAngleOutOfRange,
}

/// The error type for model validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A layer failed one of the input constraints.
    #[error("layer {index} ('{name}'): {constraint}")]
    InvalidLayer {
        /// The position of the layer in the caller's input sequence.
        index: LayerIndex,
        /// The display label of the layer.
        name: String,
        /// The constraint the layer violated.
        constraint: LayerConstraint,
    },
}
