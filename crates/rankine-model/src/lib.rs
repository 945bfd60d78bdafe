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

//! # Rankine Model
//!
//! **The core domain model for the Rankine lateral earth pressure solver.**
//!
//! This crate defines the data structures shared by the pressure model
//! (`rankine-pressure`) and the layer-order search (`rankine-search`). It is
//! the data interchange layer between the problem definition (soil records
//! supplied by a caller) and the computation engines.
//!
//! ## Architecture
//!
//! * **`index`**: a strongly-typed `LayerIndex` so orderings always refer to
//!   layers by their position in the caller's input, never by value.
//! * **`layer`**: the immutable `SoilLayer` value type, physical constants,
//!   and eager stack validation.
//! * **`profile`**: `PressureBreakpoint` and `PressureProfile`, the
//!   piecewise-linear pressure-vs-depth output format.
//! * **`arrangement`**: `Arrangement`, an ordering of the input layers plus
//!   the resultant force it produces.
//! * **`loading`**: a text-record loader turning `phi, gamma, thickness,
//!   name` rows into validated layers.
//!
//! ## Design Philosophy
//!
//! 1. **Immutable values**: a `SoilLayer` is never mutated after creation;
//!    searches reorder indices into the caller's slice instead of copying or
//!    mutating layers.
//! 2. **Positional identity**: two layers with identical fields are distinct
//!    entities when they come from distinct input rows. Equality of fields
//!    is never used to deduplicate orderings.
//! 3. **Fail-fast**: validation runs once, eagerly, before any profile or
//!    search work begins. Invalid input never surfaces mid-integration.

pub mod arrangement;
pub mod error;
pub mod index;
pub mod layer;
pub mod loading;
pub mod num;
pub mod profile;

pub use arrangement::Arrangement;
pub use error::{LayerConstraint, ModelError};
pub use index::LayerIndex;
pub use layer::{validate_layers, SoilLayer, GAMMA_W};
pub use num::PressureScalar;
pub use profile::{PressureBreakpoint, PressureProfile};
