use posecam_infer::EstimateOptions;

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    fps: u32,
    estimate: EstimateOptions,
    clear_each_frame: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            estimate: EstimateOptions::default(),
            clear_each_frame: false,
        }
    }
}

impl PipelineConfig {
    /// Display refresh rate the frame clock should run at.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_estimate_options(mut self, estimate: EstimateOptions) -> Self {
        self.estimate = estimate;
        self
    }

    /// Wipe the surface before each pose is drawn instead of letting marks accumulate.
    pub fn with_clear_each_frame(mut self, clear: bool) -> Self {
        self.clear_each_frame = clear;
        self
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn estimate_options(&self) -> &EstimateOptions {
        &self.estimate
    }

    pub fn clear_each_frame(&self) -> bool {
        self.clear_each_frame
    }
}
