// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading point files: one `x y` pair per line, `#` starts a comment.

use std::fs;
use std::path::{Path, PathBuf};

use kdplane_index::Point;
use thiserror::Error;

/// Errors raised while loading a point file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token is not a number.
    #[error("line {line}: expected a number, found {token:?}")]
    Number { line: usize, token: String },

    /// A line does not hold exactly two coordinates.
    #[error("line {line}: expected 2 coordinates, found {found}")]
    Arity { line: usize, found: usize },

    /// The coordinates do not form a valid point.
    #[error("line {line}: {source}")]
    Point {
        line: usize,
        #[source]
        source: kdplane_index::Error,
    },
}

/// Load every point from the file at `path`.
pub fn read_points(path: &Path) -> Result<Vec<Point>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_points(&text)
}

/// Parse points from text. Blank lines and comments are skipped.
pub fn parse_points(text: &str) -> Result<Vec<Point>, InputError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let [x, y] = tokens[..] else {
            return Err(InputError::Arity {
                line,
                found: tokens.len(),
            });
        };
        let x = parse_coord(x, line)?;
        let y = parse_coord(y, line)?;
        let p = Point::try_new(x, y).map_err(|source| InputError::Point { line, source })?;
        out.push(p);
    }
    Ok(out)
}

fn parse_coord(token: &str, line: usize) -> Result<f64, InputError> {
    token.parse().map_err(|_| InputError::Number {
        line,
        token: token.to_owned(),
    })
}
