use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the frame loop's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStats {
    pub cycles: u64,
    pub frames_acquired: u64,
    pub frames_released: u64,
    pub inferences: u64,
    pub detections: u64,
    pub skipped_not_ready: u64,
    pub camera_errors: u64,
    pub inference_errors: u64,
    pub render_rejections: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub cycles: AtomicU64,
    pub frames_acquired: AtomicU64,
    pub frames_released: AtomicU64,
    pub inferences: AtomicU64,
    pub detections: AtomicU64,
    pub skipped_not_ready: AtomicU64,
    pub camera_errors: AtomicU64,
    pub inference_errors: AtomicU64,
    pub render_rejections: AtomicU64,
}

pub(crate) fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

impl Counters {
    pub fn snapshot(&self) -> PipelineStats {
        let get = |c: &AtomicU64| c.load(Ordering::Relaxed);
        PipelineStats {
            cycles: get(&self.cycles),
            frames_acquired: get(&self.frames_acquired),
            frames_released: get(&self.frames_released),
            inferences: get(&self.inferences),
            detections: get(&self.detections),
            skipped_not_ready: get(&self.skipped_not_ready),
            camera_errors: get(&self.camera_errors),
            inference_errors: get(&self.inference_errors),
            render_rejections: get(&self.render_rejections),
        }
    }
}
