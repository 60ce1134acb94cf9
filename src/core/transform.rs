//! Data space to pixel space.
//!
//! The visible window is four data ranges wide and tall with the data
//! centred in it.  All arithmetic stays in `D128`; only the final pixel
//! coordinates are narrowed to `f32`.
//!
//! Only the output *width* drives the scale.  The y scale is the width scale
//! divided by the aspect ratio, and the y offset is multiplied by the aspect
//! ratio when a point is mapped.  Images produced so far rely on both, so
//! they are reproduced exactly.

use fastnum::D128;
use num_traits::ToPrimitive;

use crate::core::{
    bounds::{Axis, Bounds},
    constants::{VIEW_MARGIN_FACTOR, VIEW_RANGE_FACTOR},
    data::RawPoint,
    error::TransformError,
};

/// A mapped point in output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// A mapped point still at decimal precision; distances are measured here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPoint {
    pub x: D128,
    pub y: D128,
}

impl ViewPoint {
    /// Narrow to `f32`; `None` if either axis does not fit.
    #[must_use]
    pub fn to_pixel(self) -> Option<PixelPoint> {
        Some(PixelPoint {
            x: narrow(self.x)?,
            y: narrow(self.y)?,
        })
    }

    /// Euclidean distance to `other`, squared in decimal and rooted in `f64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn distance(self, other: Self) -> Option<f32> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let sum = ToPrimitive::to_f64(&(dx * dx + dy * dy))?;
        let r = sum.sqrt() as f32;
        r.is_finite().then_some(r)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn narrow(d: D128) -> Option<f32> {
    let v = ToPrimitive::to_f64(&d)? as f32;
    v.is_finite().then_some(v)
}

/// Scale and offset factors, derived once after loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub range_x: D128,
    pub range_y: D128,
    pub aspect_ratio: D128,
    pub view_range_x: D128,
    pub view_range_y: D128,
    pub view_offset_x: D128,
    pub view_offset_y: D128,
    pub scale_x: D128,
    pub scale_y: D128,
}

impl ViewTransform {
    /// Derive the transform for `bounds` on an image `output_width` pixels
    /// wide.  The height takes no part in the scale.
    ///
    /// Fails when either axis has zero extent, which would otherwise divide
    /// by zero.
    pub fn new(bounds: &Bounds, output_width: u32) -> Result<Self, TransformError> {
        let x = bounds.extent(Axis::X).ok_or(TransformError::ZeroRangeX)?;
        let y = bounds.extent(Axis::Y).ok_or(TransformError::ZeroRangeY)?;

        let range_x = x.range();
        let range_y = y.range();
        if range_y.is_zero() {
            return Err(TransformError::ZeroRangeY);
        }
        // a zero x range makes the aspect ratio zero, and scale_y divides by it
        if range_x.is_zero() {
            return Err(TransformError::ZeroRangeX);
        }

        let aspect_ratio = range_x / range_y;
        let view_range_x = VIEW_RANGE_FACTOR * range_x;
        let view_range_y = VIEW_RANGE_FACTOR * range_y;
        let view_offset_x = x.min - VIEW_MARGIN_FACTOR * range_x;
        let view_offset_y = y.min - VIEW_MARGIN_FACTOR * range_y;

        let width = D128::from(output_width);
        let scale_x = width / view_range_x;
        let scale_y = (width / view_range_y) / aspect_ratio;

        Ok(Self {
            range_x,
            range_y,
            aspect_ratio,
            view_range_x,
            view_range_y,
            view_offset_x,
            view_offset_y,
            scale_x,
            scale_y,
        })
    }

    #[inline]
    #[must_use]
    pub fn map_to_view(&self, p: &RawPoint) -> ViewPoint {
        ViewPoint {
            x: (p.x - self.view_offset_x) * self.scale_x,
            y: (p.y - self.view_offset_y * self.aspect_ratio) * self.scale_y,
        }
    }

    /// `None` when a coordinate overflows `f32`.
    #[inline]
    #[must_use]
    pub fn map_to_pixel(&self, p: &RawPoint) -> Option<PixelPoint> {
        self.map_to_view(p).to_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> D128 {
        s.parse().unwrap()
    }

    fn pt(x: &str, y: &str) -> RawPoint {
        RawPoint::new(d(x), d(y))
    }

    fn bounds_of(points: &[RawPoint]) -> Bounds {
        Bounds::from_points(points)
    }

    #[test]
    fn two_point_square_scenario() {
        let pts = [pt("0", "0"), pt("10", "10")];
        let t = ViewTransform::new(&bounds_of(&pts), 100).unwrap();

        assert_eq!(t.range_x, d("10"));
        assert_eq!(t.range_y, d("10"));
        assert_eq!(t.aspect_ratio, d("1"));
        assert_eq!(t.view_range_x, d("40"));
        assert_eq!(t.view_range_y, d("40"));
        assert_eq!(t.view_offset_x, d("-15"));
        assert_eq!(t.view_offset_y, d("-15"));
        assert_eq!(t.scale_x, d("2.5"));
        assert_eq!(t.scale_y, d("2.5"));

        assert_eq!(t.map_to_pixel(&pts[0]), Some(PixelPoint { x: 37.5, y: 37.5 }));
        assert_eq!(t.map_to_pixel(&pts[1]), Some(PixelPoint { x: 62.5, y: 62.5 }));
    }

    // y offset scaled by the aspect ratio at map time only
    #[test]
    fn non_square_data_uses_aspect_in_y_formula() {
        let pts = [pt("0", "0"), pt("20", "10")];
        let t = ViewTransform::new(&bounds_of(&pts), 80).unwrap();

        assert_eq!(t.aspect_ratio, d("2"));
        assert_eq!(t.view_offset_y, d("-15"));
        assert_eq!(t.scale_x, d("1")); // 80 / 80
        assert_eq!(t.scale_y, d("1")); // (80 / 40) / 2

        let v = t.map_to_view(&pts[0]);
        assert_eq!(v.x, d("30"));
        assert_eq!(v.y, d("30")); // (0 - (-15 * 2)) * 1
    }

    #[test]
    fn mapping_is_affine() {
        let pts = [pt("-3.5", "2"), pt("6.5", "12")];
        let t = ViewTransform::new(&bounds_of(&pts), 640).unwrap();
        assert_eq!(t.scale_x, d("16"));

        let a = pt("1.5", "4");
        let b = pt("-2", "9.5");
        let (va, vb) = (t.map_to_view(&a), t.map_to_view(&b));
        assert_eq!(va.x - vb.x, (a.x - b.x) * t.scale_x);
        assert_eq!(va.y - vb.y, (a.y - b.y) * t.scale_y);
    }

    #[test]
    fn zero_y_range_is_an_error() {
        let pts = [pt("0", "5"), pt("10", "5"), pt("3", "5")];
        assert_eq!(
            ViewTransform::new(&bounds_of(&pts), 100),
            Err(TransformError::ZeroRangeY)
        );
    }

    #[test]
    fn zero_x_range_is_an_error() {
        let pts = [pt("2", "0"), pt("2", "10")];
        assert_eq!(
            ViewTransform::new(&bounds_of(&pts), 100),
            Err(TransformError::ZeroRangeX)
        );
    }

    #[test]
    fn no_bounds_is_an_error() {
        assert!(ViewTransform::new(&Bounds::new(), 100).is_err());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = ViewPoint { x: d("0"), y: d("0") };
        let b = ViewPoint { x: d("3"), y: d("4") };
        assert_eq!(a.distance(b), Some(5.0));
    }
}
