//! A collection of constants.

use fastnum::{D128, dec128};

/// Output width used when none is given on the command line
pub const DEFAULT_OUTPUT_WIDTH: u32 = 2000;
/// Output height used when none is given on the command line
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 2000;
/// Point radius, in pixels
pub const DEFAULT_POINT_SIZE: u32 = 10;

/// The visible window is this many data ranges wide (and tall).
pub const VIEW_RANGE_FACTOR: D128 = dec128!(4);
/// Data is shifted right/down by this many ranges, leaving a margin on each side.
///
/// 4 ranges of view minus 1 range of data leaves 1.5 ranges on either side.
pub const VIEW_MARGIN_FACTOR: D128 = dec128!(1.5);

/// Lines starting with this character are ignored by the loader
pub const COMMENT_PREFIX: u8 = b';';
/// Field separator within one record
pub const FIELD_SEPARATOR: u8 = b',';

/// Significant digits kept per field; longer fractions are rounded to this.
/// A `D128` coefficient holds any 38-digit integer.
pub const MAX_SIGNIFICANT_DIGITS: usize = 38;

/// JPEG quality, fixed at maximum
pub const JPEG_QUALITY: u8 = 100;
/// Extension appended to output paths that lack it
pub const OUTPUT_EXTENSION: &str = ".jpg";
