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

//! The search output format: an ordering of the input layers plus the
//! resultant force that ordering produces.
//!
//! An `Arrangement` never owns layers. It stores `LayerIndex` values into
//! the caller's input slice, so the caller retains ownership of the
//! `SoilLayer` entities and the optimizer only reorders references.

use crate::{index::LayerIndex, layer::SoilLayer, num::PressureScalar};
use serde::{Deserialize, Serialize};

/// An ordering of the input layers together with its resultant force.
///
/// `order[k]` is the index (into the caller's input sequence) of the layer
/// placed at stack position `k`, counted from the ground surface down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrangement<T> {
    /// The resultant force of this ordering in kN/m.
    force: T,

    /// The permutation of input positions, top of the stack first.
    order: Vec<LayerIndex>,
}

impl<T> Arrangement<T>
where
    T: PressureScalar,
{
    /// Constructs a new `Arrangement`.
    #[inline]
    pub fn new(force: T, order: Vec<LayerIndex>) -> Self {
        Self { force, order }
    }

    /// Constructs the arrangement of a zero-layer stack: an empty ordering
    /// with zero force. A valid degenerate case, not an error.
    #[inline]
    pub fn empty() -> Self {
        Self {
            force: T::zero(),
            order: Vec::new(),
        }
    }

    /// Returns the resultant force of this ordering in kN/m.
    #[inline]
    pub fn force(&self) -> T {
        self.force
    }

    /// Returns the permutation, top of the stack first.
    #[inline]
    pub fn order(&self) -> &[LayerIndex] {
        &self.order
    }

    /// Returns the number of layers in the ordering.
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the zero-layer arrangement.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the ordering against the caller's input slice, returning
    /// references to the layers in arranged order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for `layers`, i.e. if the
    /// arrangement was produced for a different input sequence.
    pub fn resolve<'a>(&self, layers: &'a [SoilLayer<T>]) -> Vec<&'a SoilLayer<T>> {
        self.order
            .iter()
            .map(|index| {
                debug_assert!(
                    index.get() < layers.len(),
                    "called `Arrangement::resolve` with layer index out of bounds: the len is {} but the index is {}",
                    layers.len(),
                    index.get()
                );
                &layers[index.get()]
            })
            .collect()
    }
}

impl<T> std::fmt::Display for Arrangement<T>
where
    T: PressureScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Arrangement Summary")?;
        writeln!(f, "   Resultant Force: {} kN/m", self.force)?;

        if self.is_empty() {
            writeln!(f, "   (No layers)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<12}", "Position", "Input Layer")?;
        writeln!(f, "   {:-<10}-+-{:-<12}", "", "")?;
        for (position, index) in self.order.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<12}", position, index.get())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Arrangement;
    use crate::{index::LayerIndex, layer::SoilLayer};

    fn li(i: usize) -> LayerIndex {
        LayerIndex::new(i)
    }

    #[test]
    fn accessors_round_trip() {
        let arrangement = Arrangement::new(27.0f64, vec![li(2), li(0), li(1)]);
        assert_eq!(arrangement.force(), 27.0);
        assert_eq!(arrangement.order(), &[li(2), li(0), li(1)]);
        assert_eq!(arrangement.num_layers(), 3);
        assert!(!arrangement.is_empty());
    }

    #[test]
    fn empty_arrangement_has_zero_force() {
        let arrangement: Arrangement<f64> = Arrangement::empty();
        assert_eq!(arrangement.force(), 0.0);
        assert!(arrangement.is_empty());
        assert_eq!(arrangement.num_layers(), 0);
    }

    #[test]
    fn resolve_reorders_references() {
        let layers = vec![
            SoilLayer::new(30.0, 18.0, 2.0, "Sand"),
            SoilLayer::new(25.0, 17.0, 3.0, "Silt"),
        ];
        let arrangement = Arrangement::new(0.0f64, vec![li(1), li(0)]);
        let resolved = arrangement.resolve(&layers);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name(), "Silt");
        assert_eq!(resolved[1].name(), "Sand");
        // References point into the caller's slice, no copies are made.
        assert!(std::ptr::eq(resolved[0], &layers[1]));
    }

    #[test]
    fn display_lists_positions() {
        let arrangement = Arrangement::new(12.5f64, vec![li(1), li(0)]);
        let rendered = format!("{}", arrangement);
        assert!(rendered.contains("12.5 kN/m"));
        assert!(rendered.contains("Input Layer"));
    }
}
