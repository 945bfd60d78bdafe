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

//! # The Rankine Facade
//!
//! `RankineSolver` is the one type most callers need. It validates inputs
//! once and then delegates to the pure evaluation functions of
//! `rankine_pressure` and the exhaustive search of `rankine_search`.
//!
//! ## Usage
//!
//! ```rust
//! use rankine_model::SoilLayer;
//! use rankine_solver::RankineSolver;
//!
//! let layers = vec![
//!     SoilLayer::new(25.0, 17.0, 3.0, "Silt"),
//!     SoilLayer::new(35.0, 20.0, 2.0, "Gravel"),
//! ];
//!
//! let solver = RankineSolver::new();
//! let outcome = solver.optimize(&layers, Some(2.0f64)).unwrap();
//! assert!(outcome.arrangement().force() <= outcome.baseline_force());
//! ```

use rankine_model::{validate_layers, Arrangement, ModelError, PressureProfile, PressureScalar, SoilLayer};
use rankine_pressure::{pressure_profile, resultant_force};
use rankine_search::{LayerOrderOptimizer, SearchError, SearchLimits, SearchStatistics};

/// The result of an optimization run, including the force of the input
/// ordering for comparison.
///
/// The baseline is the resultant force of the stack exactly as the caller
/// supplied it; the arrangement holds the minimum found over all orderings.
/// The optimum never exceeds the baseline, because the input ordering is
/// itself one of the evaluated permutations.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOutcome<T> {
    baseline_force: T,
    arrangement: Arrangement<T>,
    statistics: SearchStatistics,
}

impl<T> OptimizeOutcome<T>
where
    T: PressureScalar,
{
    /// Returns the resultant force of the input ordering in kN/m.
    #[inline]
    pub fn baseline_force(&self) -> T {
        self.baseline_force
    }

    /// Returns the minimum-force arrangement.
    #[inline]
    pub fn arrangement(&self) -> &Arrangement<T> {
        &self.arrangement
    }

    /// Returns the statistics of the underlying search.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns how much force the optimal ordering saves over the input
    /// ordering, in kN/m. Zero when the input was already optimal.
    #[inline]
    pub fn improvement(&self) -> T {
        self.baseline_force - self.arrangement.force()
    }
}

impl<T> std::fmt::Display for OptimizeOutcome<T>
where
    T: PressureScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Optimization Outcome")?;
        writeln!(f, "   Baseline Force:  {} kN/m", self.baseline_force)?;
        writeln!(f, "   Optimal Force:   {} kN/m", self.arrangement.force())?;
        writeln!(f, "   Improvement:     {} kN/m", self.improvement())?;
        write!(f, "{}", self.statistics)
    }
}

/// The high-level solver: validated pressure evaluation plus layer-order
/// optimization behind a single configuration point.
///
/// Construction through [`RankineSolver::builder`] configures the search
/// limits; [`RankineSolver::new`] uses the defaults (a ten-layer ceiling on
/// exhaustive search).
#[derive(Debug, Clone, Default)]
pub struct RankineSolver {
    limits: SearchLimits,
}

impl RankineSolver {
    /// Creates a solver with default limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a solver with custom limits.
    #[inline]
    pub fn builder() -> RankineSolverBuilder {
        RankineSolverBuilder::new()
    }

    /// Returns the configured search limits.
    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Validates the stack and computes its pressure profile for the given
    /// ordering.
    pub fn compute_profile<T>(
        &self,
        layers: &[SoilLayer<T>],
        water_table: Option<T>,
    ) -> Result<PressureProfile<T>, ModelError>
    where
        T: PressureScalar,
    {
        validate_layers(layers)?;
        Ok(pressure_profile(layers, water_table))
    }

    /// Validates the stack and computes its resultant force for the given
    /// ordering, in kN/m.
    ///
    /// Identical (bit for bit) to integrating the profile returned by
    /// [`RankineSolver::compute_profile`] for the same inputs.
    pub fn compute_force<T>(
        &self,
        layers: &[SoilLayer<T>],
        water_table: Option<T>,
    ) -> Result<T, ModelError>
    where
        T: PressureScalar,
    {
        validate_layers(layers)?;
        Ok(resultant_force(layers, water_table))
    }

    /// Searches all orderings of the stack for the minimum-force
    /// arrangement and reports it alongside the force of the input
    /// ordering.
    pub fn optimize<T>(
        &self,
        layers: &[SoilLayer<T>],
        water_table: Option<T>,
    ) -> Result<OptimizeOutcome<T>, SearchError>
    where
        T: PressureScalar,
    {
        let optimizer = LayerOrderOptimizer::new().with_limits(self.limits);
        let (arrangement, statistics) = optimizer.optimize(layers, water_table)?.into_parts();

        // The optimizer has validated the stack; the baseline is just one
        // more evaluation of the same pure function.
        let baseline_force = resultant_force(layers, water_table);
        log::info!(
            "optimized {}-layer stack: {} kN/m (baseline {} kN/m)",
            layers.len(),
            arrangement.force(),
            baseline_force
        );

        Ok(OptimizeOutcome {
            baseline_force,
            arrangement,
            statistics,
        })
    }
}

/// Builder for [`RankineSolver`].
#[derive(Debug, Clone, Default)]
pub struct RankineSolverBuilder {
    limits: SearchLimits,
}

impl RankineSolverBuilder {
    /// Creates a builder with default limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum layer count accepted for exhaustive search.
    #[inline]
    pub fn with_max_layers(mut self, max_layers: usize) -> Self {
        self.limits = SearchLimits::with_max_layers(max_layers);
        self
    }

    /// Removes the layer-count ceiling. The caller takes responsibility
    /// for the factorial run time of large stacks.
    #[inline]
    pub fn unbounded_search(mut self) -> Self {
        self.limits = SearchLimits::unbounded();
        self
    }

    /// Builds the solver.
    #[inline]
    pub fn build(self) -> RankineSolver {
        RankineSolver {
            limits: self.limits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RankineSolver;
    use rankine_model::{ModelError, SoilLayer};
    use rankine_search::SearchError;

    fn layer(phi: f64, gamma: f64, thickness: f64, name: &str) -> SoilLayer<f64> {
        SoilLayer::new(phi, gamma, thickness, name)
    }

    fn sample_stack() -> Vec<SoilLayer<f64>> {
        vec![
            layer(25.0, 17.0, 3.0, "Silt"),
            layer(35.0, 20.0, 2.0, "Gravel"),
            layer(30.0, 18.0, 1.5, "Sand"),
        ]
    }

    #[test]
    fn force_matches_profile_integral() {
        let solver = RankineSolver::new();
        let layers = sample_stack();
        for gwt in [None, Some(0.0), Some(2.5), Some(10.0)] {
            let force = solver.compute_force(&layers, gwt).unwrap();
            let profile = solver.compute_profile(&layers, gwt).unwrap();
            assert_eq!(force, profile.integrate());
        }
    }

    #[test]
    fn invalid_layer_is_reported_with_its_position() {
        let solver = RankineSolver::new();
        let layers = vec![
            layer(30.0, 18.0, 2.0, "Sand"),
            layer(30.0, 18.0, 0.0, "Paper"),
        ];
        let error = solver.compute_profile(&layers, None).unwrap_err();
        match error {
            ModelError::InvalidLayer { index, name, .. } => {
                assert_eq!(index.get(), 1);
                assert_eq!(name, "Paper");
            }
        }
    }

    #[test]
    fn optimum_never_exceeds_the_baseline() {
        let solver = RankineSolver::new();
        let layers = sample_stack();
        for gwt in [None, Some(1.0), Some(3.0)] {
            let outcome = solver.optimize(&layers, gwt).unwrap();
            assert!(outcome.arrangement().force() <= outcome.baseline_force());
            assert!(outcome.improvement() >= 0.0);
        }
    }

    #[test]
    fn empty_stack_optimizes_to_the_empty_arrangement() {
        let solver = RankineSolver::new();
        let outcome = solver
            .optimize(&Vec::<SoilLayer<f64>>::new(), None)
            .unwrap();
        assert!(outcome.arrangement().is_empty());
        assert_eq!(outcome.baseline_force(), 0.0);
        assert_eq!(outcome.improvement(), 0.0);
    }

    #[test]
    fn builder_ceiling_is_enforced() {
        let solver = RankineSolver::builder().with_max_layers(2).build();
        let result = solver.optimize(&sample_stack(), None);
        assert_eq!(
            result.unwrap_err(),
            SearchError::OversizedSearch {
                num_layers: 3,
                limit: 2
            }
        );
    }

    #[test]
    fn unbounded_builder_admits_larger_stacks() {
        let solver = RankineSolver::builder().unbounded_search().build();
        assert!(solver.limits().max_layers().is_none());
        assert!(solver.optimize(&sample_stack(), None).is_ok());
    }

    #[test]
    fn outcome_display_reports_both_forces() {
        let solver = RankineSolver::new();
        let outcome = solver.optimize(&sample_stack(), None).unwrap();
        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Baseline Force"));
        assert!(rendered.contains("Optimal Force"));
        assert!(rendered.contains("Search Statistics:"));
    }
}
