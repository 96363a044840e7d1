use posecam_base::Tensor;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// A captured frame that must be released exactly once.
///
/// The frame owns its pixels. `release` hands the backing resources back to
/// whoever produced the frame; dropping an unreleased frame releases it too,
/// so the hook runs once on every path.
#[must_use = "frames hold capture resources until released"]
pub struct CameraFrame {
    tensor: Tensor<u8>,
    hook: Option<ReleaseHook>,
}

impl CameraFrame {
    /// A frame with nothing to hand back on release.
    pub fn new(tensor: Tensor<u8>) -> Self {
        Self { tensor, hook: None }
    }

    pub fn with_release(tensor: Tensor<u8>, hook: impl FnOnce() + Send + 'static) -> Self {
        Self {
            tensor,
            hook: Some(Box::new(hook)),
        }
    }

    /// HWC pixels, `[height, width, channels]`.
    pub fn tensor(&self) -> &Tensor<u8> {
        &self.tensor
    }

    pub fn release(mut self) {
        self.run_hook();
    }

    fn run_hook(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }
}

impl Drop for CameraFrame {
    fn drop(&mut self) {
        self.run_hook();
    }
}

impl fmt::Debug for CameraFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraFrame")
            .field("tensor", &self.tensor)
            .field("released", &self.hook.is_none())
            .finish()
    }
}

/// Counts frames handed out and frames released.
///
/// Cameras wrap each outgoing tensor with `track`; the two counts match once
/// every frame has been released.
#[derive(Clone, Debug, Default)]
pub struct ReleaseCounter {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl ReleaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, tensor: Tensor<u8>) -> CameraFrame {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        let released = Arc::clone(&self.released);
        CameraFrame::with_release(tensor, move || {
            released.fetch_add(1, Ordering::SeqCst);
        })
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Frames handed out but not yet released.
    pub fn outstanding(&self) -> usize {
        self.acquired().saturating_sub(self.released())
    }
}
