mod adjacency;
mod estimator;
mod postprocess;
mod preprocess;
mod types;
mod yolo;

pub use adjacency::{CONNECTED_PARTS, adjacent_keypoints};
pub use estimator::{EstimateOptions, PoseEstimator};
pub use postprocess::postprocess;
pub use preprocess::preprocess;
pub use types::{KEYPOINT_COUNT, Keypoint, KeypointLabel, LetterboxInfo, Pose};
pub use yolo::YoloPoseEstimator;
