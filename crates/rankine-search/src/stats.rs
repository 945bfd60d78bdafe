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

/// Statistics collected during a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of orderings evaluated during the search.
    pub permutations_evaluated: u64,
    /// Number of times the incumbent was replaced by a strictly better
    /// ordering (the first installation included).
    pub incumbent_updates: u64,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(
            f,
            "  Permutations Evaluated: {}",
            self.permutations_evaluated
        )?;
        writeln!(f, "  Incumbent Updates: {}", self.incumbent_updates)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    permutations_evaluated: u64,
    incumbent_updates: u64,
    solve_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with zeroed counters.
    #[inline]
    pub fn new() -> Self {
        Self {
            permutations_evaluated: 0,
            incumbent_updates: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of orderings evaluated.
    #[inline]
    pub fn permutations_evaluated(mut self, permutations_evaluated: u64) -> Self {
        self.permutations_evaluated = permutations_evaluated;
        self
    }

    /// Sets the number of incumbent updates.
    #[inline]
    pub fn incumbent_updates(mut self, incumbent_updates: u64) -> Self {
        self.incumbent_updates = incumbent_updates;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            permutations_evaluated: self.permutations_evaluated,
            incumbent_updates: self.incumbent_updates,
            solve_duration: self.solve_duration,
        }
    }
}
