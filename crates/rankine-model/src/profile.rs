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

//! The piecewise-linear pressure-vs-depth output format.
//!
//! A `PressureProfile` is an ordered sequence of `PressureBreakpoint`s;
//! consecutive pairs bound a linear pressure segment. Depths are cumulative
//! from the ground surface (0 at the top of the first layer) and
//! non-decreasing along the sequence. Integration uses the trapezoidal rule
//! with a fixed left-to-right summation order, so a force derived from a
//! profile is bit-for-bit reproducible.

use crate::num::PressureScalar;
use serde::{Deserialize, Serialize};

/// A single point of the pressure distribution.
///
/// `depth` is measured in meters from the ground surface; `pressure` is the
/// lateral effective pressure in kPa at that depth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressureBreakpoint<T> {
    /// Cumulative depth below the ground surface in meters.
    pub depth: T,
    /// Lateral effective pressure in kPa.
    pub pressure: T,
}

impl<T> PressureBreakpoint<T> {
    /// Creates a new breakpoint.
    #[inline]
    pub const fn new(depth: T, pressure: T) -> Self {
        Self { depth, pressure }
    }
}

/// An ordered sequence of pressure breakpoints.
///
/// # Examples
///
/// ```rust
/// use rankine_model::profile::{PressureBreakpoint, PressureProfile};
///
/// let profile = PressureProfile::new(vec![
///     PressureBreakpoint::new(0.0, 0.0),
///     PressureBreakpoint::new(3.0, 18.0),
/// ]);
/// // One trapezoid: 0.5 * (0 + 18) * 3
/// assert_eq!(profile.integrate(), 27.0);
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PressureProfile<T> {
    breakpoints: Vec<PressureBreakpoint<T>>,
}

impl<T> PressureProfile<T>
where
    T: PressureScalar,
{
    /// Constructs a profile from a breakpoint sequence.
    ///
    /// # Panics
    ///
    /// Debug builds panic if the depths are not non-decreasing.
    pub fn new(breakpoints: Vec<PressureBreakpoint<T>>) -> Self {
        debug_assert!(
            breakpoints.windows(2).all(|pair| pair[0].depth <= pair[1].depth),
            "called `PressureProfile::new` with decreasing depths"
        );

        Self { breakpoints }
    }

    /// Constructs an empty profile (the output for a zero-layer stack).
    #[inline]
    pub fn empty() -> Self {
        Self {
            breakpoints: Vec::new(),
        }
    }

    /// Returns the breakpoint sequence.
    #[inline]
    pub fn breakpoints(&self) -> &[PressureBreakpoint<T>] {
        &self.breakpoints
    }

    /// Returns the number of breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Returns `true` if the profile has no breakpoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Returns the depth of the deepest breakpoint, if any.
    #[inline]
    pub fn max_depth(&self) -> Option<T> {
        self.breakpoints.last().map(|bp| bp.depth)
    }

    /// Integrates the profile with the trapezoidal rule.
    ///
    /// The result is the resultant force in kN per linear meter of wall:
    /// `Σ 0.5·(p_i + p_{i+1})·(d_{i+1} − d_i)` over consecutive breakpoints,
    /// summed strictly left to right. An empty or single-point profile
    /// integrates to zero.
    pub fn integrate(&self) -> T {
        let half = T::from_f64(0.5).expect("0.5 is representable in any float type");
        let mut force = T::zero();
        for pair in self.breakpoints.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            force = force + half * (upper.pressure + lower.pressure) * (lower.depth - upper.depth);
        }
        force
    }
}

impl<T> std::fmt::Display for PressureProfile<T>
where
    T: PressureScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pressure Profile ({} breakpoints)", self.len())?;
        writeln!(f, "   {:<12} | {:<14}", "Depth (m)", "Pressure (kPa)")?;
        writeln!(f, "   {:-<12}-+-{:-<14}", "", "")?;
        for bp in &self.breakpoints {
            writeln!(f, "   {:<12} | {:<14}", bp.depth, bp.pressure)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PressureBreakpoint, PressureProfile};

    fn bp(depth: f64, pressure: f64) -> PressureBreakpoint<f64> {
        PressureBreakpoint::new(depth, pressure)
    }

    #[test]
    fn empty_profile_integrates_to_zero() {
        let profile: PressureProfile<f64> = PressureProfile::empty();
        assert!(profile.is_empty());
        assert_eq!(profile.integrate(), 0.0);
        assert_eq!(profile.max_depth(), None);
    }

    #[test]
    fn single_point_profile_integrates_to_zero() {
        let profile = PressureProfile::new(vec![bp(0.0, 5.0)]);
        assert_eq!(profile.integrate(), 0.0);
    }

    #[test]
    fn single_trapezoid() {
        let profile = PressureProfile::new(vec![bp(0.0, 0.0), bp(2.0, 10.0)]);
        assert_eq!(profile.integrate(), 10.0);
        assert_eq!(profile.max_depth(), Some(2.0));
    }

    #[test]
    fn multi_segment_sum() {
        // Two trapezoids: 0.5*(0+10)*2 + 0.5*(10+20)*1 = 10 + 15
        let profile = PressureProfile::new(vec![bp(0.0, 0.0), bp(2.0, 10.0), bp(3.0, 20.0)]);
        assert_eq!(profile.integrate(), 25.0);
    }

    #[test]
    fn coincident_depths_contribute_nothing() {
        // A zero-width segment is legal (e.g. a breakpoint exactly at a
        // layer boundary) and adds no area.
        let profile = PressureProfile::new(vec![bp(0.0, 0.0), bp(2.0, 10.0), bp(2.0, 10.0)]);
        assert_eq!(profile.integrate(), 10.0);
    }

    #[test]
    #[should_panic(expected = "decreasing depths")]
    #[cfg(debug_assertions)]
    fn decreasing_depths_panic_in_debug() {
        let _ = PressureProfile::new(vec![bp(2.0, 0.0), bp(1.0, 5.0)]);
    }

    #[test]
    fn display_lists_breakpoints() {
        let profile = PressureProfile::new(vec![bp(0.0, 0.0), bp(2.0, 10.0)]);
        let rendered = format!("{}", profile);
        assert!(rendered.contains("2 breakpoints"));
        assert!(rendered.contains("Pressure (kPa)"));
    }
}
