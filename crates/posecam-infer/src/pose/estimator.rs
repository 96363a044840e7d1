use crate::InferError;
use posecam_base::Tensor;

use super::types::Pose;

/// Per-call settings passed to a pose estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateOptions {
    /// Minimum subject score for a pose to be reported.
    pub confidence_threshold: f32,
    /// Mirror x coordinates, for front-facing cameras.
    pub flip_horizontal: bool,
    /// Model output stride; one of 8, 16 or 32.
    pub output_stride: u32,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            flip_horizontal: true,
            output_stride: 16,
        }
    }
}

impl EstimateOptions {
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_flip_horizontal(mut self, flip: bool) -> Self {
        self.flip_horizontal = flip;
        self
    }

    pub fn with_output_stride(mut self, stride: u32) -> Self {
        self.output_stride = stride;
        self
    }

    pub fn validate(&self) -> Result<(), InferError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(InferError::InvalidOption(format!(
                "confidence threshold {} outside [0, 1]",
                self.confidence_threshold
            )));
        }
        if !matches!(self.output_stride, 8 | 16 | 32) {
            return Err(InferError::InvalidOption(format!(
                "output stride {} is not 8, 16 or 32",
                self.output_stride
            )));
        }
        Ok(())
    }
}

/// Single-pose estimation over an HWC RGB frame.
///
/// `Ok(None)` means nobody was found in the frame; that is not an error.
pub trait PoseEstimator: Send {
    fn estimate(
        &mut self,
        image: &Tensor<u8>,
        options: &EstimateOptions,
    ) -> Result<Option<Pose>, InferError>;
}
