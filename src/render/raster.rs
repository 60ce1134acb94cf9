//! The three primitives the renderer needs from a drawing surface.

use crate::core::{
    color::{PointStyle, Stroke},
    error::RenderError,
    transform::PixelPoint,
};

/// A surface that accepts primitives in call order; later calls paint over
/// earlier ones.
pub trait Rasterizer {
    /// Filled circle with a border, centred on `center`.
    fn point(&mut self, center: PixelPoint, radius: f32, style: PointStyle)
    -> Result<(), RenderError>;

    /// Circle outline only.
    fn circle(&mut self, center: PixelPoint, radius: f32, stroke: Stroke)
    -> Result<(), RenderError>;

    /// Straight segment; endpoints may lie far outside the surface.
    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke)
    -> Result<(), RenderError>;
}

/// Every primitive call, in order.  Used to check what a render pass asked
/// for without looking at pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Point {
        center: PixelPoint,
        radius: f32,
    },
    Circle {
        center: PixelPoint,
        radius: f32,
    },
    Line {
        from: PixelPoint,
        to: PixelPoint,
    },
}

/// Rasterizer that only records.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Primitive>,
}

impl Recorder {
    #[must_use]
    pub fn count(&self, f: impl Fn(&Primitive) -> bool) -> usize {
        self.calls.iter().filter(|p| f(*p)).count()
    }
}

impl Rasterizer for Recorder {
    fn point(&mut self, center: PixelPoint, radius: f32, _: PointStyle) -> Result<(), RenderError> {
        self.calls.push(Primitive::Point { center, radius });
        Ok(())
    }

    fn circle(&mut self, center: PixelPoint, radius: f32, _: Stroke) -> Result<(), RenderError> {
        self.calls.push(Primitive::Circle { center, radius });
        Ok(())
    }

    fn line(&mut self, from: PixelPoint, to: PixelPoint, _: Stroke) -> Result<(), RenderError> {
        self.calls.push(Primitive::Line { from, to });
        Ok(())
    }
}
