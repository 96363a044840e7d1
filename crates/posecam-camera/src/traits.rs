use crate::{CameraError, CameraFrame};
use std::future::Future;

/// Async camera trait for frame capture.
///
/// `recv` suspends until the next frame is available. Implementations may
/// write `async fn recv` as long as the returned future is `Send`, so the
/// frame loop can live on a spawned task.
pub trait Camera: Send {
    fn recv(&mut self) -> impl Future<Output = Result<CameraFrame, CameraError>> + Send;
}
