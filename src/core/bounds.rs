//! Running extrema per axis, updated one field at a time.

use fastnum::D128;

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Inclusive `[min, max]` over every value observed on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: D128,
    pub max: D128,
}

impl Extent {
    #[inline]
    #[must_use]
    pub fn range(&self) -> D128 {
        self.max - self.min
    }

    fn include(&mut self, v: D128) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }
}

/// Extrema of the data set.  An axis stays `None` until one value on it has
/// been observed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: Option<Extent>,
    pub y: Option<Extent>,
}

impl Bounds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the extent of `axis` so it covers `v`.
    pub fn observe(&mut self, axis: Axis, v: D128) {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        match slot {
            Some(e) => e.include(v),
            None => *slot = Some(Extent { min: v, max: v }),
        }
    }

    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> Option<Extent> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Bounds of a point set, both axes updated together.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a crate::core::data::RawPoint>,
    {
        let mut b = Self::new();
        for p in points {
            b.observe(Axis::X, p.x);
            b.observe(Axis::Y, p.y);
        }
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i32) -> D128 {
        D128::from(v)
    }

    #[test]
    fn empty_bounds_are_undefined() {
        let b = Bounds::new();
        assert_eq!(b.extent(Axis::X), None);
        assert_eq!(b.extent(Axis::Y), None);
    }

    #[test]
    fn axes_are_tracked_independently() {
        let mut b = Bounds::new();
        b.observe(Axis::Y, d(3));
        assert_eq!(b.x, None);
        b.observe(Axis::Y, d(-7));
        b.observe(Axis::Y, d(1));
        let y = b.extent(Axis::Y).unwrap();
        assert_eq!((y.min, y.max), (d(-7), d(3)));
        assert_eq!(y.range(), d(10));
    }

    #[test]
    fn single_value_has_zero_range() {
        let mut b = Bounds::new();
        b.observe(Axis::X, d(5));
        assert!(b.extent(Axis::X).unwrap().range().is_zero());
    }
}
