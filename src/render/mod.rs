pub mod canvas;
pub mod raster;
pub mod scene;

pub use canvas::Canvas;
pub use raster::{Primitive, Rasterizer, Recorder};
pub use scene::{RenderStats, Renderer, extended_line, render};
