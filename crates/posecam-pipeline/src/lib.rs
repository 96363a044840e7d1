//! The per-frame capture, inference and draw loop.

pub mod clock;
pub mod config;
pub mod pipeline;
pub mod stats;

pub use clock::{FrameClock, IntervalClock};
pub use config::PipelineConfig;
pub use pipeline::FramePipeline;
pub use stats::PipelineStats;
