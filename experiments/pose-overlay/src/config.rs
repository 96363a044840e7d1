use posecam_camera::CameraConfig;
use posecam_infer::Device;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const MODEL_PATH_VAR: &str = "POSECAM_MODEL_PATH";
pub const CAMERA_DEVICE_VAR: &str = "POSECAM_CAMERA_DEVICE";
pub const WIDTH_VAR: &str = "POSECAM_WIDTH";
pub const HEIGHT_VAR: &str = "POSECAM_HEIGHT";
pub const FPS_VAR: &str = "POSECAM_FPS";
pub const DEVICE_VAR: &str = "POSECAM_DEVICE";
pub const STORE_PATH_VAR: &str = "POSECAM_STORE_PATH";
pub const LOG_DIR_VAR: &str = "POSECAM_LOG_DIR";

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "invalid {var}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the overlay app, read from `POSECAM_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub camera_device: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub device: Device,
    pub store_path: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/yolov8n-pose.onnx"),
            camera_device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
            device: Device::Cpu,
            store_path: PathBuf::from("posecam.json"),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(MODEL_PATH_VAR) {
            config.model_path = path.into();
        }
        if let Some(device) = get(CAMERA_DEVICE_VAR) {
            config.camera_device = device;
        }
        if let Some(width) = get(WIDTH_VAR) {
            config.width = parse_positive(WIDTH_VAR, &width)?;
        }
        if let Some(height) = get(HEIGHT_VAR) {
            config.height = parse_positive(HEIGHT_VAR, &height)?;
        }
        if let Some(fps) = get(FPS_VAR) {
            config.fps = parse_positive(FPS_VAR, &fps)?;
        }
        if let Some(device) = get(DEVICE_VAR) {
            config.device = Device::from_str(device.trim()).map_err(|_| ConfigError::Invalid {
                var: DEVICE_VAR,
                value: device.clone(),
            })?;
        }
        if let Some(path) = get(STORE_PATH_VAR) {
            config.store_path = path.into();
        }
        config.log_dir = get(LOG_DIR_VAR).map(PathBuf::from);

        Ok(config)
    }

    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig::default()
            .with_device(self.camera_device.clone())
            .with_width(self.width)
            .with_height(self.height)
            .with_fps(self.fps)
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}
