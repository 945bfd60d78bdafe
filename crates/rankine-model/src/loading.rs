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

//! Soil record loader for the lateral earth pressure domain.
//!
//! This module turns delimited text streams into validated layer stacks,
//! mapping `phi, gamma, thickness, name` records into `SoilLayer` values.
//!
//! The `LayerLoader` emphasizes clarity and robustness. Records may be
//! comma- or whitespace-separated, lines may contain comments introduced by
//! `#`, and parse errors point directly at the offending line and token.
//! Validation of the loaded stack is on by default and can be disabled for
//! callers that validate later themselves.
//!
//! The loader accepts any `BufRead`, file path, or string slice, making it
//! convenient to integrate with tests and tooling.

use crate::{
    error::ModelError,
    layer::{validate_layers, SoilLayer},
    num::PressureScalar,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use thiserror::Error;

/// The error type for the record loading process.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record did not carry the four required fields.
    #[error("line {line}: expected 4 fields (phi, gamma, thickness, name), found {found}")]
    MissingFields {
        /// The 1-based line number of the record.
        line: usize,
        /// The number of fields actually present.
        found: usize,
    },
    /// A numeric token could not be parsed.
    #[error("line {line}: could not parse '{token}' as {field}")]
    Parse {
        /// The 1-based line number of the record.
        line: usize,
        /// The token that failed to parse.
        token: String,
        /// The name of the field being read.
        field: &'static str,
    },
    /// The loaded stack failed model validation.
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

/// A configurable loader for soil layer records.
///
/// The expected record format is one layer per line:
///
/// ```raw
/// phi, gamma, thickness, name
/// 30,  18,    2,         Dense sand
/// 25,  17,    3,         Sandy silt
/// ```
///
/// Fields are comma-separated; whitespace-separated records are accepted
/// too, in which case every token after the third belongs to the name.
/// Everything after a `#` is a comment.
///
/// # Configuration
/// * `has_header`: skip the first non-comment line (column captions).
/// * `validate`: run `validate_layers` on the loaded stack (default on).
///
/// # Examples
///
/// ```rust
/// use rankine_model::loading::LayerLoader;
///
/// let input = "\
/// phi, gamma, thickness, name
/// 30, 18, 2, Dense sand
/// 25, 17, 3, Sandy silt  # below the fill
/// ";
/// let layers = LayerLoader::new().from_str::<f64>(input).unwrap();
/// assert_eq!(layers.len(), 2);
/// assert_eq!(layers[1].name(), "Sandy silt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerLoader {
    has_header: bool,
    validate: bool,
}

impl Default for LayerLoader {
    fn default() -> Self {
        Self {
            has_header: true,
            validate: true,
        }
    }
}

impl LayerLoader {
    /// Creates a new `LayerLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the first non-comment line is a header to skip.
    #[inline]
    pub fn has_header(mut self, yes: bool) -> Self {
        self.has_header = yes;
        self
    }

    /// Configures whether the loaded stack is validated before returning.
    #[inline]
    pub fn validate(mut self, yes: bool) -> Self {
        self.validate = yes;
        self
    }

    /// Loads layers from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, reader: R) -> Result<Vec<SoilLayer<T>>, LoadError>
    where
        T: PressureScalar,
        R: BufRead,
    {
        let mut layers = Vec::new();
        let mut header_pending = self.has_header;

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.split('#').next().unwrap_or("").trim();
            if record.is_empty() {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            layers.push(parse_record(record, line_index + 1)?);
        }

        if self.validate {
            validate_layers(&layers)?;
        }

        Ok(layers)
    }

    /// Loads layers from a string slice.
    pub fn from_str<T>(&self, input: &str) -> Result<Vec<SoilLayer<T>>, LoadError>
    where
        T: PressureScalar,
    {
        self.from_bufread(input.as_bytes())
    }

    /// Loads layers from a file path.
    pub fn from_path<T, P>(&self, path: P) -> Result<Vec<SoilLayer<T>>, LoadError>
    where
        T: PressureScalar,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }
}

fn parse_record<T>(record: &str, line: usize) -> Result<SoilLayer<T>, LoadError>
where
    T: PressureScalar,
{
    let fields: Vec<String> = if record.contains(',') {
        record
            .splitn(4, ',')
            .map(|field| field.trim().to_string())
            .collect()
    } else {
        let tokens: Vec<&str> = record.split_whitespace().collect();
        if tokens.len() >= 4 {
            let mut fields: Vec<String> = tokens[..3].iter().map(|t| t.to_string()).collect();
            fields.push(tokens[3..].join(" "));
            fields
        } else {
            tokens.iter().map(|t| t.to_string()).collect()
        }
    };

    if fields.len() < 4 || fields.iter().any(|field| field.is_empty()) {
        return Err(LoadError::MissingFields {
            line,
            found: fields.iter().filter(|field| !field.is_empty()).count(),
        });
    }

    let phi = parse_scalar(&fields[0], line, "phi")?;
    let gamma = parse_scalar(&fields[1], line, "gamma")?;
    let thickness = parse_scalar(&fields[2], line, "thickness")?;

    Ok(SoilLayer::new(phi, gamma, thickness, fields[3].clone()))
}

fn parse_scalar<T>(token: &str, line: usize, field: &'static str) -> Result<T, LoadError>
where
    T: PressureScalar,
{
    let value: f64 = token.parse().map_err(|_| LoadError::Parse {
        line,
        token: token.to_string(),
        field,
    })?;

    T::from_f64(value).ok_or_else(|| LoadError::Parse {
        line,
        token: token.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::{LayerLoader, LoadError};
    use crate::error::{LayerConstraint, ModelError};

    #[test]
    fn loads_comma_separated_records_with_header() {
        let input = "\
phi, gamma, thickness, name
30, 18, 2, Dense sand
25, 17, 3, Sandy silt
";
        let layers = LayerLoader::new().from_str::<f64>(input).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].friction_angle_deg(), 30.0);
        assert_eq!(layers[0].name(), "Dense sand");
        assert_eq!(layers[1].thickness(), 3.0);
    }

    #[test]
    fn loads_whitespace_separated_records_without_header() {
        let input = "30 18 2 Dense sand\n25 17 3 Silt\n";
        let layers = LayerLoader::new()
            .has_header(false)
            .from_str::<f64>(input)
            .unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].name(), "Dense sand");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "\
# backfill candidates
phi, gamma, thickness, name

30, 18, 2, Sand  # the top fill
";
        let layers = LayerLoader::new().from_str::<f64>(input).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].name(), "Sand");
    }

    #[test]
    fn reports_parse_error_with_line_and_token() {
        let input = "30, eighteen, 2, Sand\n";
        let err = LayerLoader::new()
            .has_header(false)
            .from_str::<f64>(input)
            .unwrap_err();
        match err {
            LoadError::Parse { line, token, field } => {
                assert_eq!(line, 1);
                assert_eq!(token, "eighteen");
                assert_eq!(field, "gamma");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn reports_missing_fields() {
        let input = "30, 18, 2\n";
        let err = LayerLoader::new()
            .has_header(false)
            .from_str::<f64>(input)
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingFields { line: 1, found: 3 }
        ));
    }

    #[test]
    fn validation_failure_names_the_layer() {
        let input = "30, 18, -2, Sand\n";
        let err = LayerLoader::new()
            .has_header(false)
            .from_str::<f64>(input)
            .unwrap_err();
        match err {
            LoadError::Invalid(ModelError::InvalidLayer {
                name, constraint, ..
            }) => {
                assert_eq!(name, "Sand");
                assert_eq!(constraint, LayerConstraint::NonPositiveThickness);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validation_can_be_disabled() {
        let input = "30, 18, -2, Sand\n";
        let layers = LayerLoader::new()
            .has_header(false)
            .validate(false)
            .from_str::<f64>(input)
            .unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_stack() {
        let layers = LayerLoader::new().from_str::<f64>("").unwrap();
        assert!(layers.is_empty());
    }
}
