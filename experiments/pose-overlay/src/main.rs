use minifb::{Key, Window, WindowOptions};
use pose_overlay::AppConfig;
use pose_overlay::settings::{
    persist_flip_horizontal, persist_found_position, restore_flip_horizontal,
    restore_found_position,
};
use posecam_base::{init_file_logger, init_stdout_logger};
use posecam_camera::{Camera, CameraError, CameraFrame, V4l2Camera};
use posecam_infer::{EstimateOptions, ModelSlot, ModelSource, OnnxBackend, YoloPoseEstimator};
use posecam_overlay::{OverlayRenderer, RgbSurface};
use posecam_pipeline::{FramePipeline, IntervalClock, PipelineConfig};
use posecam_store::{FileStorage, KeyValueStore, MemoryStorage, Storage};
use std::path::Path;
use std::sync::Arc;

/// The capture device, or nothing if it could not be opened.
enum Source {
    Live(V4l2Camera),
    Offline,
}

impl Camera for Source {
    async fn recv(&mut self) -> Result<CameraFrame, CameraError> {
        match self {
            Source::Live(camera) => camera.recv().await,
            Source::Offline => std::future::pending().await,
        }
    }
}

fn open_camera(config: &AppConfig) -> Source {
    match V4l2Camera::new(config.camera_config()) {
        Ok(camera) => {
            log::info!("camera {} open", config.camera_device);
            Source::Live(camera)
        }
        Err(e) => {
            log::warn!("camera {} unavailable: {}", config.camera_device, e);
            Source::Offline
        }
    }
}

fn open_store(path: &Path) -> KeyValueStore<Box<dyn Storage>> {
    let storage: Box<dyn Storage> = match FileStorage::open(path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("settings {}: {}, keeping them in memory", path.display(), e);
            Box::new(MemoryStorage::new())
        }
    };
    KeyValueStore::new(storage)
}

/// Load the model off the runtime threads; the slot stays empty on failure.
fn spawn_model_load(config: &AppConfig, slot: ModelSlot<YoloPoseEstimator>) {
    let path = config.model_path.clone();
    let device = config.device.clone();
    tokio::spawn(async move {
        log::info!("loading pose model {} on {}", path.display(), device);
        let source = ModelSource::File(path.clone());
        let loaded = tokio::task::spawn_blocking(move || {
            YoloPoseEstimator::new(source, &OnnxBackend::new(device))
        })
        .await;
        match loaded {
            Ok(Ok(estimator)) => {
                slot.install(estimator);
                log::info!("pose model ready");
            }
            Ok(Err(e)) => log::error!("pose model {}: {}", path.display(), e),
            Err(e) => log::error!("pose model loader failed: {}", e),
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    match config.log_dir() {
        Some(dir) => init_file_logger(dir)?,
        None => init_stdout_logger(),
    }
    log::info!(
        "pose overlay {}x{} @ {} fps, model {}",
        config.width,
        config.height,
        config.fps,
        config.model_path.display()
    );

    let mut store = open_store(&config.store_path);
    let flip = restore_flip_horizontal(&store, true);
    persist_flip_horizontal(&mut store, flip);
    if let Some(position) = restore_found_position(&store) {
        log::info!("last found at {}", position);
    }

    let camera = open_camera(&config);
    let model = ModelSlot::empty();
    spawn_model_load(&config, model.clone());

    let (width, height) = (config.width as usize, config.height as usize);
    let renderer = Arc::new(OverlayRenderer::with_surface(RgbSurface::new(width, height)));
    let pipeline_config = PipelineConfig::default()
        .with_estimate_options(EstimateOptions::default().with_flip_horizontal(flip));
    let clock = IntervalClock::new(pipeline_config.fps());
    let pipeline = FramePipeline::new(
        camera,
        model,
        Arc::clone(&renderer),
        clock,
        pipeline_config,
    );

    let mut window = Window::new(
        "Pose Overlay - ESC to exit",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(60);

    pipeline.start();

    let mut last_found = None;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let Some(argb) = renderer.with_attached(|surface| surface.to_argb()) else {
            break;
        };
        window.update_with_buffer(&argb, width, height)?;

        if let Some(position) = renderer.found_position() {
            if last_found != Some(position) {
                persist_found_position(&mut store, position);
                last_found = Some(position);
            }
        }
        tokio::task::yield_now().await;
    }

    pipeline.stop();
    pipeline.stopped().await;
    renderer.detach();

    let stats = pipeline.stats();
    log::info!(
        "done: {} frames, {} inferences, {} poses, {} skipped while loading",
        stats.frames_acquired,
        stats.inferences,
        stats.detections,
        stats.skipped_not_ready
    );
    Ok(())
}
