//! Camera capture abstraction for posecam.
//!
//! Cameras hand out `CameraFrame`s: single-use handles around an HWC `Tensor<u8>`
//! that must be released once the consumer is done with them.

pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use frame::{CameraFrame, ReleaseCounter};
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
