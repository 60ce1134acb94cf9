//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::{Axis, Bounds},
    color::{ColorError, Palette, PointStyle, Stroke},
    config::{Mode, RenderConfig, RenderConfigBuilder},
    data::{PlotData, RawPoint, read_points},
    error::{ConfigError, LoadError, PlotError, RenderError, TransformError},
    transform::{PixelPoint, ViewTransform},
};

pub use render::{Canvas, Rasterizer, RenderStats, Renderer, render};

/// Convenience function: load `input`, render with `config` and write a
/// JPEG to `output` (`.jpg` appended when missing).  Returns the path
/// actually written.
pub fn plot_file(input: &str, output: &str, config: &RenderConfig) -> Result<String, PlotError> {
    use crate::core::{config::output_path_with_jpg, data::read_points_from_path};

    let data = read_points_from_path(input)?;
    let canvas = render(&data, config)?;
    let path = output_path_with_jpg(output);
    canvas.save_jpeg(&path)?;
    Ok(path)
}
