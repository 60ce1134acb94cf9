//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::color::ColorError;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mode `{0}`, expected one of: points, lines")]
    InvalidMode(String),
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: u32 },
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// The data file could not be opened or read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open input `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error reading input after line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// The data extent cannot be mapped onto the image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("all points share one x value, the x range is zero")]
    ZeroRangeX,
    #[error("all points share one y value, the y range is zero")]
    ZeroRangeY,
}

/// A primitive could not be drawn.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("pixel coordinate for point #{index} is not representable as a float")]
    Coordinate { index: usize },
    #[error("circle radius between points #{from} and #{to} is not representable as a float")]
    Radius { from: usize, to: usize },
    #[error("non-finite geometry passed to the rasterizer")]
    NonFinite,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("no valid points in input, nothing to plot")]
    EmptyData,
}
