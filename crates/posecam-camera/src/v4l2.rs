use crate::{Camera, CameraConfig, CameraError, CameraFrame, ReleaseCounter};
use posecam_base::Tensor;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// V4L2 camera producing RGB frames from an MJPEG stream.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
    counter: ReleaseCounter,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("started", &self.receiver.is_some())
            .field("outstanding", &self.counter.outstanding())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<CameraFrame, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        let tensor = receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("capture thread exited".to_string()))??;

        Ok(self.counter.track(tensor))
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Closing the channel makes the capture thread's next send fail.
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()` and set MJPEG at the requested size and rate.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, refuses
    /// MJPEG, or rejects the format or frame rate.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        format = Capture::set_format(&device, &format)?;

        if format.fourcc != FourCC::new(b"MJPG") {
            return Err(CameraError::Device(
                "MJPEG format not supported by device".to_string(),
            ));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        log::info!(
            "opened {} at {}x{} @ {} fps",
            config.device(),
            format.width,
            format.height,
            config.fps()
        );

        Ok(Self {
            config,
            device: Some(device),
            receiver: None,
            thread_handle: None,
            counter: ReleaseCounter::new(),
        })
    }

    /// Start the capture thread on first use.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count();
        let (tx, rx) = mpsc::channel(buffer_count as usize);

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, tx, buffer_count) {
                log::warn!("capture thread stopped: {}", e);
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    fn capture_loop(
        device: Device,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: u32,
    ) -> Result<(), CameraError> {
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count)?;

        loop {
            // The mmap buffer is only valid until the next call.
            let (jpeg, _metadata) = CaptureStream::next(&mut stream)?;
            let decoded = decode_mjpeg(jpeg);

            if tx.blocking_send(decoded).is_err() {
                break;
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Acquisition and release counts for frames handed out by `recv`.
    pub fn counter(&self) -> &ReleaseCounter {
        &self.counter
    }
}

/// Decode one MJPEG buffer into an HWC RGB tensor.
pub fn decode_mjpeg(data: &[u8]) -> Result<Tensor<u8>, CameraError> {
    let rgb = image::load_from_memory(data)
        .map_err(|e| CameraError::Decode(e.to_string()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Tensor::new(
        vec![height as usize, width as usize, 3],
        rgb.into_raw(),
    )?)
}
