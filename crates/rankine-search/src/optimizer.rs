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

//! The exhaustive layer-order optimizer.

use crate::{
    error::SearchError,
    incumbent::Incumbent,
    limits::{SearchLimits, SearchSpace},
    stats::{SearchStatistics, SearchStatisticsBuilder},
    strategy::{LexicographicPermutations, PermutationStrategy},
};
use rankine_model::{validate_layers, Arrangement, PressureScalar, SoilLayer};
use rankine_pressure::resultant_force;

/// The result of a completed search: the minimum-force arrangement and the
/// statistics of the run that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    arrangement: Arrangement<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PressureScalar,
{
    /// Returns the minimum-force arrangement.
    #[inline]
    pub fn arrangement(&self) -> &Arrangement<T> {
        &self.arrangement
    }

    /// Returns the statistics of the search run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Decomposes the outcome into its arrangement and statistics.
    #[inline]
    pub fn into_parts(self) -> (Arrangement<T>, SearchStatistics) {
        (self.arrangement, self.statistics)
    }
}

/// Finds the layer ordering with the minimum resultant lateral force by
/// evaluating every permutation of the input.
///
/// The optimizer is configured once and reusable across inputs. Enumeration
/// is delegated to a [`PermutationStrategy`]; the default is
/// [`LexicographicPermutations`], which together with the strict incumbent
/// rule makes results fully deterministic: the same input always returns
/// the same arrangement, and ties resolve to the lexicographically first
/// ordering.
///
/// # Examples
///
/// ```rust
/// use rankine_model::SoilLayer;
/// use rankine_search::LayerOrderOptimizer;
///
/// let layers = vec![
///     SoilLayer::new(25.0, 17.0, 3.0, "Silt"),
///     SoilLayer::new(35.0, 20.0, 2.0, "Gravel"),
/// ];
/// let outcome = LayerOrderOptimizer::new()
///     .optimize(&layers, None::<f64>)
///     .unwrap();
/// assert_eq!(outcome.arrangement().num_layers(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayerOrderOptimizer<S = LexicographicPermutations> {
    strategy: S,
    limits: SearchLimits,
}

impl LayerOrderOptimizer<LexicographicPermutations> {
    /// Creates an optimizer with the default strategy and limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> LayerOrderOptimizer<S>
where
    S: PermutationStrategy,
{
    /// Creates an optimizer using the given enumeration strategy.
    #[inline]
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            strategy,
            limits: SearchLimits::default(),
        }
    }

    /// Replaces the search limits.
    #[inline]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the configured limits.
    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Searches all orderings of `layers` for the one with the minimum
    /// resultant force.
    ///
    /// Validation and the size check run before any ordering is evaluated;
    /// a stack that fails either produces an error without doing any search
    /// work. A zero-layer stack is valid and returns the empty arrangement
    /// with zero force.
    pub fn optimize<T>(
        &self,
        layers: &[SoilLayer<T>],
        water_table: Option<T>,
    ) -> Result<SearchOutcome<T>, SearchError>
    where
        T: PressureScalar,
    {
        validate_layers(layers)?;
        self.limits.check(layers.len())?;

        let space = SearchSpace::new(layers.len());
        log::debug!(
            "starting {} search over {}",
            self.strategy.name(),
            space
        );

        let start = std::time::Instant::now();
        let mut incumbent = Incumbent::new();
        let mut evaluated: u64 = 0;
        let mut updates: u64 = 0;
        let mut ordered: Vec<&SoilLayer<T>> = Vec::with_capacity(layers.len());

        for ordering in self.strategy.orderings(layers.len()) {
            ordered.clear();
            ordered.extend(ordering.iter().map(|index| &layers[index.get()]));

            let force = resultant_force(ordered.iter().copied(), water_table);
            evaluated += 1;

            if incumbent.try_install(force, &ordering) {
                updates += 1;
                log::trace!(
                    "new incumbent after {} orderings: {} kN/m",
                    evaluated,
                    force
                );
            }
        }

        let arrangement = incumbent
            .into_best()
            .expect("a permutation strategy must yield at least one ordering");
        let statistics = SearchStatisticsBuilder::new()
            .permutations_evaluated(evaluated)
            .incumbent_updates(updates)
            .solve_duration(start.elapsed())
            .build();

        log::debug!(
            "search finished: {} kN/m after {} orderings in {:.3} s",
            arrangement.force(),
            statistics.permutations_evaluated,
            statistics.solve_duration.as_secs_f64()
        );

        Ok(SearchOutcome {
            arrangement,
            statistics,
        })
    }
}
