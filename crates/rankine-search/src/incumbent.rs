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

//! The best arrangement found so far.

use rankine_model::{Arrangement, LayerIndex, PressureScalar};

/// Tracks the minimum-force arrangement seen during a search.
///
/// Installation requires a strictly lower force than the current best.
/// Under a deterministic enumeration order this makes the tie-break rule
/// explicit: among orderings with equal force, the first one encountered
/// wins and is never displaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<T> {
    best: Option<Arrangement<T>>,
}

impl<T> Incumbent<T>
where
    T: PressureScalar,
{
    /// Creates an empty incumbent.
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns the current best arrangement, if any candidate has been
    /// installed yet.
    #[inline]
    pub fn best(&self) -> Option<&Arrangement<T>> {
        self.best.as_ref()
    }

    /// Returns the force of the current best arrangement.
    #[inline]
    pub fn best_force(&self) -> Option<T> {
        self.best.as_ref().map(Arrangement::force)
    }

    /// Offers a candidate ordering. Installs it and returns `true` if no
    /// arrangement is held yet or if `force` is strictly lower than the
    /// current best; otherwise leaves the incumbent untouched.
    ///
    /// The ordering is only cloned when the candidate actually wins.
    pub fn try_install(&mut self, force: T, order: &[LayerIndex]) -> bool {
        match &self.best {
            Some(best) if !(force < best.force()) => false,
            _ => {
                self.best = Some(Arrangement::new(force, order.to_vec()));
                true
            }
        }
    }

    /// Consumes the incumbent and returns the best arrangement found.
    #[inline]
    pub fn into_best(self) -> Option<Arrangement<T>> {
        self.best
    }
}

impl<T> Default for Incumbent<T>
where
    T: PressureScalar,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Incumbent;
    use rankine_model::LayerIndex;

    fn order(indices: &[usize]) -> Vec<LayerIndex> {
        indices.iter().copied().map(LayerIndex::new).collect()
    }

    #[test]
    fn first_candidate_always_installs() {
        let mut incumbent = Incumbent::new();
        assert!(incumbent.try_install(42.0f64, &order(&[0, 1])));
        assert_eq!(incumbent.best_force(), Some(42.0));
    }

    #[test]
    fn lower_force_displaces_the_best() {
        let mut incumbent = Incumbent::new();
        incumbent.try_install(42.0f64, &order(&[0, 1]));
        assert!(incumbent.try_install(40.0, &order(&[1, 0])));
        assert_eq!(incumbent.best_force(), Some(40.0));
        assert_eq!(incumbent.best().unwrap().order(), order(&[1, 0]).as_slice());
    }

    #[test]
    fn equal_force_keeps_the_first_ordering() {
        let mut incumbent = Incumbent::new();
        incumbent.try_install(42.0f64, &order(&[0, 1]));
        assert!(!incumbent.try_install(42.0, &order(&[1, 0])));
        assert_eq!(incumbent.best().unwrap().order(), order(&[0, 1]).as_slice());
    }

    #[test]
    fn higher_force_is_rejected() {
        let mut incumbent = Incumbent::new();
        incumbent.try_install(42.0f64, &order(&[0]));
        assert!(!incumbent.try_install(43.0, &order(&[0])));
        assert_eq!(incumbent.best_force(), Some(42.0));
    }

    #[test]
    fn empty_ordering_is_a_valid_candidate() {
        let mut incumbent = Incumbent::new();
        assert!(incumbent.try_install(0.0f64, &[]));
        let best = incumbent.into_best().unwrap();
        assert!(best.is_empty());
        assert_eq!(best.force(), 0.0);
    }
}
