//! Skeleton overlay drawing.
//!
//! `OverlayRenderer` turns a `Pose` into point and segment commands on a
//! `Surface` it is handed; `RgbSurface` is the in-memory raster used for display.

pub mod error;
pub mod raster;
pub mod renderer;
pub mod surface;

pub use error::RenderError;
pub use raster::RgbSurface;
pub use renderer::{
    LINE_WIDTH, MIN_PART_CONFIDENCE, OverlayRenderer, POINT_RADIUS, RenderSummary, TargetMatch,
    default_target,
};
pub use surface::{Color, DrawCommand, RecordingSurface, Surface};
