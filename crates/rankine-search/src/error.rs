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

//! Errors reported by the layer-order search.

use rankine_model::ModelError;
use thiserror::Error;

/// An error that prevents a search from starting.
///
/// Both variants are raised before any permutation is evaluated; a search
/// that starts always finishes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The stack has more layers than the configured ceiling allows. An
    /// exhaustive search visits `n!` orderings, so the cost grows faster
    /// than any polynomial; the ceiling keeps run time bounded.
    #[error(
        "cannot search a {num_layers}-layer stack exhaustively: \
         the configured limit is {limit} layers ({num_layers}! orderings would be evaluated)"
    )]
    OversizedSearch {
        /// The number of layers in the rejected stack.
        num_layers: usize,
        /// The configured ceiling the stack exceeded.
        limit: usize,
    },

    /// An input layer failed validation.
    #[error(transparent)]
    InvalidInput(#[from] ModelError),
}

#[cfg(test)]
mod tests {
    use super::SearchError;
    use rankine_model::{LayerConstraint, LayerIndex, ModelError};

    #[test]
    fn oversized_message_names_both_counts() {
        let error = SearchError::OversizedSearch {
            num_layers: 12,
            limit: 10,
        };
        let rendered = format!("{}", error);
        assert!(rendered.contains("12-layer"));
        assert!(rendered.contains("limit is 10"));
    }

    #[test]
    fn model_error_converts_transparently() {
        let model_error = ModelError::InvalidLayer {
            index: LayerIndex::new(1),
            name: "Silt".to_string(),
            constraint: LayerConstraint::NonPositiveThickness,
        };
        let rendered_model = format!("{}", model_error);
        let error: SearchError = model_error.into();
        assert_eq!(format!("{}", error), rendered_model);
    }
}
