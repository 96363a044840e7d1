use crate::clock::FrameClock;
use crate::config::PipelineConfig;
use crate::stats::{Counters, PipelineStats, bump};
use posecam_camera::{Camera, CameraError, CameraFrame};
use posecam_infer::{InferError, ModelSlot, Pose, PoseEstimator};
use posecam_overlay::{OverlayRenderer, Surface};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct Parts<C, K> {
    camera: C,
    clock: K,
}

struct Shared {
    running: AtomicBool,
    control: Mutex<Control>,
    counters: Counters,
}

/// Start/stop bookkeeping. Every transition of `running` happens under this lock.
#[derive(Default)]
struct Control {
    generation: u64,
    stop_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

/// Clears the running flag when a loop task ends, including by panic,
/// unless a newer loop has been started since.
struct RunningGuard {
    shared: Arc<Shared>,
    generation: u64,
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        let control = lock(&self.shared.control);
        if control.generation == self.generation {
            self.shared.running.store(false, Ordering::SeqCst);
        }
    }
}

/// Drives capture, inference and drawing once per frame clock tick.
///
/// At most one loop runs at a time. Each cycle waits for a frame, runs the
/// model if it has been installed, releases the frame, draws any pose, and
/// then waits for the next tick. Stopping takes effect at the next wait; a
/// cycle that has its frame always finishes. A loop started right after
/// `stop` waits for the previous one to exit before it takes any frames.
pub struct FramePipeline<C, E, S, K> {
    parts: Arc<tokio::sync::Mutex<Parts<C, K>>>,
    model: ModelSlot<E>,
    renderer: Arc<OverlayRenderer<S>>,
    config: PipelineConfig,
    shared: Arc<Shared>,
}

impl<C, E, S, K> FramePipeline<C, E, S, K>
where
    C: Camera + 'static,
    E: PoseEstimator + 'static,
    S: Surface + 'static,
    K: FrameClock + 'static,
{
    pub fn new(
        camera: C,
        model: ModelSlot<E>,
        renderer: Arc<OverlayRenderer<S>>,
        clock: K,
        config: PipelineConfig,
    ) -> Self {
        Self {
            parts: Arc::new(tokio::sync::Mutex::new(Parts { camera, clock })),
            model,
            renderer,
            config,
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                control: Mutex::new(Control::default()),
                counters: Counters::default(),
            }),
        }
    }

    /// Spawn the frame loop on the current tokio runtime.
    ///
    /// Returns `false` without doing anything if a loop is already running.
    /// After `stop` this starts a new loop, even if the old one is still
    /// finishing its cycle.
    pub fn start(&self) -> bool {
        let mut control = lock(&self.shared.control);
        if self
            .shared
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("frame loop already running");
            return false;
        }

        control.generation += 1;
        let (stop_tx, stop_rx) = watch::channel(false);
        let cycle = Cycle {
            model: self.model.clone(),
            renderer: Arc::clone(&self.renderer),
            config: self.config.clone(),
            shared: Arc::clone(&self.shared),
        };
        let guard = RunningGuard {
            shared: Arc::clone(&self.shared),
            generation: control.generation,
        };
        let previous = control.task.take();
        let handle = tokio::spawn(frame_loop(
            cycle,
            Arc::clone(&self.parts),
            stop_rx,
            previous,
            guard,
        ));

        control.stop_tx = Some(stop_tx);
        control.task = Some(handle);
        log::info!("frame loop started");
        true
    }

    /// Ask the loop to end. The next tick or frame wait does not resume.
    ///
    /// `is_running` reports `false` from here on; `stopped` waits for the task.
    pub fn stop(&self) {
        let mut control = lock(&self.shared.control);
        if let Some(stop_tx) = control.stop_tx.take() {
            self.shared.running.store(false, Ordering::SeqCst);
            let _ = stop_tx.send(true);
        }
    }

    /// Wait for the loop task, and any loop it replaced, to finish.
    pub async fn stopped(&self) {
        let handle = lock(&self.shared.control).task.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                log::error!("frame loop task failed: {}", e);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> PipelineStats {
        self.shared.counters.snapshot()
    }

    pub fn renderer(&self) -> &Arc<OverlayRenderer<S>> {
        &self.renderer
    }

    pub fn model(&self) -> &ModelSlot<E> {
        &self.model
    }
}

impl<C, E, S, K> Drop for FramePipeline<C, E, S, K> {
    fn drop(&mut self) {
        if let Some(stop_tx) = lock(&self.shared.control).stop_tx.take() {
            let _ = stop_tx.send(true);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

async fn frame_loop<C, E, S, K>(
    cycle: Cycle<E, S>,
    parts: Arc<tokio::sync::Mutex<Parts<C, K>>>,
    mut stop_rx: watch::Receiver<bool>,
    previous: Option<JoinHandle<()>>,
    _guard: RunningGuard,
) where
    C: Camera,
    E: PoseEstimator,
    S: Surface,
    K: FrameClock,
{
    if let Some(previous) = previous {
        if let Err(e) = previous.await {
            log::error!("previous frame loop task failed: {}", e);
        }
    }
    let mut parts = parts.lock().await;
    let Parts { camera, clock } = &mut *parts;

    loop {
        let received = tokio::select! {
            biased;
            _ = stop_rx.changed() => break,
            received = camera.recv() => received,
        };
        cycle.run(received);

        tokio::select! {
            biased;
            _ = stop_rx.changed() => break,
            _ = clock.tick() => {}
        }
    }

    let stats = cycle.shared.counters.snapshot();
    log::info!(
        "frame loop stopped after {} cycles ({} frames, {} poses)",
        stats.cycles,
        stats.frames_acquired,
        stats.detections
    );
}

/// Everything one cycle touches apart from the camera and clock.
struct Cycle<E, S> {
    model: ModelSlot<E>,
    renderer: Arc<OverlayRenderer<S>>,
    config: PipelineConfig,
    shared: Arc<Shared>,
}

impl<E: PoseEstimator, S: Surface> Cycle<E, S> {
    fn run(&self, received: Result<CameraFrame, CameraError>) {
        let counters = &self.shared.counters;
        bump(&counters.cycles);

        let frame = match received {
            Ok(frame) => frame,
            Err(e) => {
                bump(&counters.camera_errors);
                log::warn!("camera: {}", e);
                return;
            }
        };
        bump(&counters.frames_acquired);

        let outcome = self.estimate(&frame);
        frame.release();
        bump(&counters.frames_released);

        match outcome {
            None => {
                bump(&counters.skipped_not_ready);
                log::trace!("model not ready, frame skipped");
            }
            Some(Err(e)) => {
                bump(&counters.inference_errors);
                log::warn!("pose estimation failed: {}", e);
            }
            Some(Ok(None)) => bump(&counters.inferences),
            Some(Ok(Some(pose))) => {
                bump(&counters.inferences);
                bump(&counters.detections);
                self.draw(&pose);
            }
        }
    }

    fn estimate(&self, frame: &CameraFrame) -> Option<Result<Option<Pose>, InferError>> {
        let options = self.config.estimate_options();
        self.model
            .with_model(|model| model.estimate(frame.tensor(), options))
    }

    fn draw(&self, pose: &Pose) {
        let drawn = if self.config.clear_each_frame() {
            self.renderer
                .clear()
                .and_then(|_| self.renderer.render_pose(pose))
        } else {
            self.renderer.render_pose(pose)
        };

        match drawn {
            Ok(summary) => log::trace!(
                "drew {} points, {} segments ({} skipped)",
                summary.points,
                summary.segments,
                summary.skipped
            ),
            Err(e) => {
                bump(&self.shared.counters.render_rejections);
                log::debug!("pose not drawn: {}", e);
            }
        }
    }
}
