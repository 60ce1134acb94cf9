//! Run-time configuration object + fluent builder.

use std::{fmt, str::FromStr};

use crate::core::{
    color::{self, Palette},
    constants::{
        DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_POINT_SIZE, OUTPUT_EXTENSION,
    },
    error::ConfigError,
};

/// What gets drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One filled, bordered circle per point.
    Points,
    /// Every pair joined by an extended line and two circles.
    Lines,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "lines" => Ok(Self::Lines),
            _ => Err(ConfigError::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Points => "points",
            Self::Lines => "lines",
        })
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: Mode,
    pub width: u32,
    pub height: u32,
    pub point_radius: u32,
    pub draw_points_in_line_mode: bool,
    pub palette: Palette,
}

impl RenderConfig {
    #[inline]
    pub fn builder(mode: Mode) -> RenderConfigBuilder {
        RenderConfigBuilder::new(mode)
    }
}

/// Fluent builder; validation happens once, in `build`.
#[derive(Debug)]
pub struct RenderConfigBuilder {
    mode: Mode,
    width: Option<u32>,
    height: Option<u32>,
    point_radius: Option<u32>,
    draw_points: bool,
    fill: Option<String>,
}

impl RenderConfigBuilder {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            width: None,
            height: None,
            point_radius: None,
            draw_points: false,
            fill: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(mut self, v: u32) -> Self {
        self.width = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, v: u32) -> Self {
        self.height = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }
    #[inline]
    #[must_use]
    pub fn point_radius(mut self, v: u32) -> Self {
        self.point_radius = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn draw_points(mut self, on: bool) -> Self {
        self.draw_points = on;
        self
    }
    /// Point interior, by name or `#RRGGBB`.
    #[inline]
    #[must_use]
    pub fn point_fill(mut self, c: impl Into<String>) -> Self {
        self.fill = Some(c.into());
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let positive = |field: &'static str, value: u32| {
            if value == 0 {
                Err(ConfigError::NonPositive { field, value })
            } else {
                Ok(value)
            }
        };
        let width = positive("output width", self.width.unwrap_or(DEFAULT_OUTPUT_WIDTH))?;
        let height = positive("output height", self.height.unwrap_or(DEFAULT_OUTPUT_HEIGHT))?;
        let point_radius = positive(
            "point size",
            self.point_radius.unwrap_or(DEFAULT_POINT_SIZE),
        )?;

        let mut palette = Palette::default();
        if let Some(name) = &self.fill {
            palette = palette.with_point_fill(color::from_name(name)?);
        }

        Ok(RenderConfig {
            mode: self.mode,
            width,
            height,
            point_radius,
            draw_points_in_line_mode: self.draw_points,
            palette,
        })
    }
}

/// Append `.jpg` unless the path already ends with it (any case).
#[must_use]
pub fn output_path_with_jpg(path: &str) -> String {
    if path.to_ascii_lowercase().ends_with(OUTPUT_EXTENSION) {
        path.to_owned()
    } else {
        format!("{path}{OUTPUT_EXTENSION}")
    }
}
