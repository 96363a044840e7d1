use posecam_base::Tensor;
use posecam_camera::{Camera, CameraConfig, CameraError, CameraFrame, ReleaseCounter};

struct MockCamera {
    frame_count: usize,
    counter: ReleaseCounter,
}

impl MockCamera {
    fn new() -> Self {
        Self {
            frame_count: 0,
            counter: ReleaseCounter::new(),
        }
    }
}

impl Camera for MockCamera {
    async fn recv(&mut self) -> Result<CameraFrame, CameraError> {
        self.frame_count += 1;
        let tensor = Tensor::new(vec![2, 2, 3], vec![0u8; 12])?;
        Ok(self.counter.track(tensor))
    }
}

#[tokio::test]
async fn test_camera_trait_mock_implementation() {
    let mut cam = MockCamera::new();

    let frame1 = cam.recv().await.unwrap();
    assert_eq!(frame1.tensor().shape, vec![2, 2, 3]);
    frame1.release();

    let frame2 = cam.recv().await.unwrap();
    frame2.release();

    assert_eq!(cam.frame_count, 2);
    assert_eq!(cam.counter.acquired(), 2);
    assert_eq!(cam.counter.released(), 2);
}

#[tokio::test]
async fn test_camera_trait_polymorphism() {
    async fn capture_frames(camera: &mut impl Camera, count: usize) -> Result<usize, CameraError> {
        let mut pixels = 0;
        for _ in 0..count {
            let frame = camera.recv().await?;
            pixels += frame.tensor().len();
            frame.release();
        }
        Ok(pixels)
    }

    let mut cam = MockCamera::new();
    let pixels = capture_frames(&mut cam, 3).await.unwrap();
    assert_eq!(pixels, 36);
    assert_eq!(cam.counter.outstanding(), 0);
}

#[test]
fn test_config_builder() {
    let config = CameraConfig::default()
        .with_device("/dev/video2")
        .with_width(320)
        .with_height(240)
        .with_fps(15)
        .with_buffer_count(0);

    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 320);
    assert_eq!(config.height(), 240);
    assert_eq!(config.fps(), 15);
    assert_eq!(config.buffer_count(), 1);
}

#[test]
fn test_error_display_and_conversions() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "device not found");
    match CameraError::from(io_err) {
        CameraError::Device(msg) => assert!(msg.contains("device not found")),
        other => panic!("Expected CameraError::Device, got {other:?}"),
    }

    let tensor_err = Tensor::<u8>::new(vec![2, 2], vec![0]).unwrap_err();
    assert!(matches!(CameraError::from(tensor_err), CameraError::Decode(_)));

    let channel_err = CameraError::Channel("channel closed".to_string());
    assert_eq!(channel_err.to_string(), "channel error: channel closed");
}
