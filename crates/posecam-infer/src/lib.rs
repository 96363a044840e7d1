pub mod backend;
pub mod backends;
pub mod device;
pub mod error;
pub mod model;
pub mod modelsource;
pub mod pose;
pub mod session;

pub use backend::Backend;
pub use device::Device;
pub use error::InferError;
pub use model::ModelSlot;
pub use modelsource::ModelSource;
pub use session::Session;

pub use pose::{
    CONNECTED_PARTS, EstimateOptions, Keypoint, KeypointLabel, LetterboxInfo, Pose,
    PoseEstimator, YoloPoseEstimator, adjacent_keypoints, postprocess, preprocess,
};

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;
