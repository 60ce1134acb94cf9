//! `image`-backed raster surface plus the JPEG sink.
//!
//! Pixel `(i, j)` is centred on the integer coordinate `(i, j)`.  Outlines
//! are traced per row and per column so that no gaps appear at any slope,
//! and all loops are clipped to the image first: extended lines and huge
//! circles cost at most one pass over the visible rows and columns.

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use image::{ImageError, Rgb, RgbImage, codecs::jpeg::JpegEncoder};

use crate::core::{
    color::{PointStyle, Stroke},
    constants::JPEG_QUALITY,
    error::{PlotError, RenderError},
    transform::PixelPoint,
};
use crate::render::raster::Rasterizer;

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Blank image painted with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, background),
        }
    }

    #[inline]
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    #[inline]
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Encode at maximum quality into `w`.
    pub fn encode_jpeg<W: Write>(&self, w: W) -> Result<(), ImageError> {
        JpegEncoder::new_with_quality(w, JPEG_QUALITY).encode_image(&self.img)
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save_jpeg(&self, path: &str) -> Result<(), PlotError> {
        let io_err = |source| PlotError::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        self.encode_jpeg(&mut out)?;
        out.flush().map_err(io_err)
    }

    // --- Helpers ---

    #[inline]
    fn set(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.img.width() && y < self.img.height() {
                self.img.put_pixel(x, y, color);
            }
        }
    }

    /// One pen dab: a `width`×`width` block around `(x, y)`.
    ///
    /// `x` and `y` may be saturated indices of far-off geometry.
    fn dab(&mut self, x: i64, y: i64, stroke: Stroke) {
        let w = i64::from(stroke.width.max(1));
        let lo = -(w - 1) / 2;
        for oy in lo..lo + w {
            for ox in lo..lo + w {
                self.set(x.saturating_add(ox), y.saturating_add(oy), stroke.color);
            }
        }
    }

    /// Row/column index range `[lo, hi]` of `[a, b]` intersected with
    /// `[-pad, len - 1 + pad]`.  `None` when empty.
    fn clip_span(a: f64, b: f64, len: u32, pad: i64) -> Option<(i64, i64)> {
        let lo_lim = -pad;
        let hi_lim = i64::from(len) - 1 + pad;
        let lo = to_index(a.ceil()).max(lo_lim);
        let hi = to_index(b.floor()).min(hi_lim);
        (lo <= hi).then_some((lo, hi))
    }

    fn fill_disc(&mut self, cx: f64, cy: f64, r: f64, color: Rgb<u8>) {
        let Some((y0, y1)) = Self::clip_span(cy - r, cy + r, self.img.height(), 0) else {
            return;
        };
        let width = self.img.width();
        for y in y0..=y1 {
            let dy = y as f64 - cy;
            let half = (r * r - dy * dy).max(0.0).sqrt();
            if let Some((x0, x1)) = Self::clip_span(cx - half, cx + half, width, 0) {
                for x in x0..=x1 {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn trace_circle(&mut self, cx: f64, cy: f64, r: f64, stroke: Stroke) {
        let pad = i64::from(stroke.width);
        if r < 0.5 {
            self.dab(to_index(cx.round()), to_index(cy.round()), stroke);
            return;
        }
        if let Some((y0, y1)) = Self::clip_span(cy - r, cy + r, self.img.height(), pad) {
            for y in y0..=y1 {
                let dy = y as f64 - cy;
                let h = (r * r - dy * dy).max(0.0).sqrt();
                self.dab(to_index((cx - h).round()), y, stroke);
                self.dab(to_index((cx + h).round()), y, stroke);
            }
        }
        if let Some((x0, x1)) = Self::clip_span(cx - r, cx + r, self.img.width(), pad) {
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let v = (r * r - dx * dx).max(0.0).sqrt();
                self.dab(x, to_index((cy - v).round()), stroke);
                self.dab(x, to_index((cy + v).round()), stroke);
            }
        }
    }

    fn trace_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
        let pad = f64::from(stroke.width);
        let bounds = (
            -pad,
            -pad,
            f64::from(self.img.width()) - 1.0 + pad,
            f64::from(self.img.height()) - 1.0 + pad,
        );
        let Some(((x0, y0), (x1, y1))) = clip_segment(from, to, bounds) else {
            return;
        };
        let (dx, dy) = (x1 - x0, y1 - y0);
        let steps = dx.abs().max(dy.abs()).ceil();
        if steps < 1.0 {
            self.dab(to_index(x0.round()), to_index(y0.round()), stroke);
            return;
        }
        let n = to_index(steps);
        for i in 0..=n {
            let t = i as f64 / steps;
            self.dab(
                to_index((x0 + dx * t).round()),
                to_index((y0 + dy * t).round()),
                stroke,
            );
        }
    }
}

/// Saturating float to index; callers clamp afterwards.
#[allow(clippy::cast_possible_truncation)]
#[inline]
fn to_index(v: f64) -> i64 {
    v as i64
}

/// Liang–Barsky clip of a segment to `(xmin, ymin, xmax, ymax)`.
fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    (xmin, ymin, xmax, ymax): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, x0 - xmin),
        (dx, xmax - x0),
        (-dy, y0 - ymin),
        (dy, ymax - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }
    Some((
        (x0 + t0 * dx, y0 + t0 * dy),
        (x0 + t1 * dx, y0 + t1 * dy),
    ))
}

fn finite(p: PixelPoint) -> Result<(f64, f64), RenderError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok((f64::from(p.x), f64::from(p.y)))
    } else {
        Err(RenderError::NonFinite)
    }
}

fn finite_radius(r: f32) -> Result<f64, RenderError> {
    if r.is_finite() && r >= 0.0 {
        Ok(f64::from(r))
    } else {
        Err(RenderError::NonFinite)
    }
}

impl Rasterizer for Canvas {
    fn point(
        &mut self,
        center: PixelPoint,
        radius: f32,
        style: PointStyle,
    ) -> Result<(), RenderError> {
        let (cx, cy) = finite(center)?;
        let r = finite_radius(radius)?;
        self.fill_disc(cx, cy, r, style.fill);
        self.trace_circle(cx, cy, r, style.border);
        Ok(())
    }

    fn circle(
        &mut self,
        center: PixelPoint,
        radius: f32,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let (cx, cy) = finite(center)?;
        let r = finite_radius(radius)?;
        self.trace_circle(cx, cy, r, stroke);
        Ok(())
    }

    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let a = finite(from)?;
        let b = finite(to)?;
        self.trace_line(a, b, stroke);
        Ok(())
    }
}
