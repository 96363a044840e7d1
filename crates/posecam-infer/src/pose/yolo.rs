use crate::{Backend, InferError, ModelSource, Session};
use posecam_base::Tensor;

use super::estimator::{EstimateOptions, PoseEstimator};
use super::postprocess::postprocess;
use super::preprocess::preprocess;
use super::types::Pose;

/// Single-pose estimator over a YOLO-pose model.
///
/// Letterboxes the frame, runs the session and keeps the best-scoring subject.
pub struct YoloPoseEstimator {
    session: Box<dyn Session>,
}

impl YoloPoseEstimator {
    pub fn new(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;
        log::info!("pose model loaded via {}", backend.name());
        Ok(Self::from_session(session))
    }

    pub fn from_session(session: Box<dyn Session>) -> Self {
        Self { session }
    }
}

impl PoseEstimator for YoloPoseEstimator {
    fn estimate(
        &mut self,
        image: &Tensor<u8>,
        options: &EstimateOptions,
    ) -> Result<Option<Pose>, InferError> {
        options.validate()?;

        let (input, letterbox) = preprocess(image)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?
            .clone();

        let outputs = self.session.run(&[(input_name.as_str(), input)])?;

        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no outputs".to_string()))?;
        let output = outputs.get(output_name).ok_or_else(|| {
            InferError::Backend(format!("model did not produce output '{}'", output_name))
        })?;

        postprocess(
            output,
            &letterbox,
            options.confidence_threshold,
            options.flip_horizontal,
        )
    }
}
