//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod transform;

// re-export frequently-used items for convenience
pub use bounds::{Axis, Bounds, Extent};
pub use color::{ColorError, Palette, PointStyle, Stroke};
pub use config::{Mode, RenderConfig, RenderConfigBuilder, output_path_with_jpg};
pub use constants::{DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_POINT_SIZE, JPEG_QUALITY};
pub use data::{PlotData, RawPoint, RejectReason, RejectedLine, read_points, read_points_from_path};
pub use error::{ConfigError, LoadError, PlotError, RenderError, TransformError};
pub use transform::{PixelPoint, ViewPoint, ViewTransform};
