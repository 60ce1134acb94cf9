//! Turns mapped points into primitive calls.
//!
//! Draw order is fixed: outer index ascending, and in lines mode every
//! `j > i` ascending for each `i`.  Overdraw follows that order, so the
//! loops must stay sequential.

use log::debug;

use crate::core::{
    config::{Mode, RenderConfig},
    data::{PlotData, RawPoint},
    error::{PlotError, RenderError},
    transform::{PixelPoint, ViewPoint, ViewTransform},
};
use crate::render::{canvas::Canvas, raster::Rasterizer};

/// How many primitives one pass issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub points: usize,
    pub lines: usize,
    pub circles: usize,
}

/// The line through `p1` and `p2`, pushed far past both ends.
///
/// The push is the raw pixel delta times the output width (x) and height
/// (y), not a unit vector, so closer pairs get shorter extensions.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn extended_line(
    p1: PixelPoint,
    p2: PixelPoint,
    width: u32,
    height: u32,
) -> (PixelPoint, PixelPoint) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let (w, h) = (width as f32, height as f32);
    (
        PixelPoint {
            x: p1.x - w * dx,
            y: p1.y - h * dy,
        },
        PixelPoint {
            x: p1.x + w * dx,
            y: p1.y + h * dy,
        },
    )
}

pub struct Renderer<'a> {
    config: &'a RenderConfig,
    transform: ViewTransform,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(config: &'a RenderConfig, transform: ViewTransform) -> Self {
        Self { config, transform }
    }

    /// Map every point once; any coordinate that does not fit in `f32`
    /// aborts the pass before anything is drawn.
    fn project(&self, points: &[RawPoint]) -> Result<Vec<(ViewPoint, PixelPoint)>, RenderError> {
        points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let v = self.transform.map_to_view(p);
                let px = v.to_pixel().ok_or(RenderError::Coordinate { index })?;
                Ok((v, px))
            })
            .collect()
    }

    /// Issue every primitive for `points` onto `raster`.
    pub fn render<R: Rasterizer>(
        &self,
        points: &[RawPoint],
        raster: &mut R,
    ) -> Result<RenderStats, RenderError> {
        let cfg = self.config;
        let style = cfg.palette;
        #[allow(clippy::cast_precision_loss)]
        let radius = cfg.point_radius as f32;
        let mapped = self.project(points)?;
        let mut stats = RenderStats::default();

        match cfg.mode {
            Mode::Points => {
                for (_, p) in &mapped {
                    raster.point(*p, radius, style.point)?;
                    stats.points += 1;
                }
            }
            Mode::Lines => {
                for (i, (v1, p1)) in mapped.iter().enumerate() {
                    if cfg.draw_points_in_line_mode {
                        raster.point(*p1, radius, style.point)?;
                        stats.points += 1;
                    }
                    for (j, (v2, p2)) in mapped.iter().enumerate().skip(i + 1) {
                        let (from, to) = extended_line(*p1, *p2, cfg.width, cfg.height);
                        raster.line(from, to, style.line)?;
                        stats.lines += 1;

                        let r = v1
                            .distance(*v2)
                            .ok_or(RenderError::Radius { from: i, to: j })?;
                        raster.circle(*p1, r, style.circle)?;
                        raster.circle(*p2, r, style.circle)?;
                        stats.circles += 2;
                    }
                }
            }
        }
        debug!(
            "{} mode: {} points, {} lines, {} circles",
            cfg.mode, stats.points, stats.lines, stats.circles
        );
        Ok(stats)
    }
}

/// Render `data` onto a fresh canvas of the configured size.
///
/// No points at all is an error, as is an axis with zero extent; both are
/// detected before the canvas is allocated.
pub fn render(data: &PlotData, config: &RenderConfig) -> Result<Canvas, PlotError> {
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let transform = ViewTransform::new(&data.bounds, config.width)?;
    debug!(
        "view transform: offset ({}, {}), scale ({}, {}), aspect {}",
        transform.view_offset_x,
        transform.view_offset_y,
        transform.scale_x,
        transform.scale_y,
        transform.aspect_ratio
    );
    let mut canvas = Canvas::new(config.width, config.height, config.palette.background);
    Renderer::new(config, transform).render(&data.points, &mut canvas)?;
    Ok(canvas)
}
