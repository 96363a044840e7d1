use crate::error::RenderError;
use crate::surface::{Color, Surface};
use posecam_base::Vec2;
use posecam_infer::{CONNECTED_PARTS, KeypointLabel, Pose, adjacent_keypoints};
use std::sync::{Mutex, MutexGuard};

/// Keypoints scoring below this are neither drawn nor connected.
pub const MIN_PART_CONFIDENCE: f32 = 0.1;
pub const POINT_RADIUS: f32 = 3.0;
pub const LINE_WIDTH: f32 = 3.0;
pub const POINT_COLOR: Color = Color::RED;
pub const SEGMENT_COLOR: Color = Color::GREEN;

/// The position the renderer watches for by default.
pub fn default_target() -> Vec2<f32> {
    Vec2::new(48.62314365253374, 158.82877097519454)
}

/// How a keypoint position is compared with the target position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TargetMatch {
    /// Bit-for-bit equality. Detector output practically never hits this.
    #[default]
    Exact,
    /// Euclidean distance within the given number of pixels.
    Within(f32),
}

impl TargetMatch {
    pub fn matches(&self, position: Vec2<f32>, target: Vec2<f32>) -> bool {
        match *self {
            TargetMatch::Exact => position == target,
            TargetMatch::Within(epsilon) => position.distance(target) <= epsilon,
        }
    }
}

/// What one `render_pose` call drew.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSummary {
    pub points: usize,
    pub segments: usize,
    pub skipped: usize,
    /// Set when a drawn keypoint matched the target this frame.
    pub found: Option<Vec2<f32>>,
}

/// Draws poses onto a surface it owns once one is attached.
///
/// The surface sits behind a mutex so the frame loop can draw while the
/// display side reads it. `render_pose` never clears; call `clear` first to
/// draw each frame on a fresh surface.
pub struct OverlayRenderer<S> {
    surface: Mutex<Option<S>>,
    pairs: Vec<(KeypointLabel, KeypointLabel)>,
    min_confidence: f32,
    target: Vec2<f32>,
    target_match: TargetMatch,
    found: Mutex<Option<Vec2<f32>>>,
}

impl<S: Surface> Default for OverlayRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> OverlayRenderer<S> {
    /// A renderer with no surface yet.
    pub fn new() -> Self {
        Self {
            surface: Mutex::new(None),
            pairs: CONNECTED_PARTS.to_vec(),
            min_confidence: MIN_PART_CONFIDENCE,
            target: default_target(),
            target_match: TargetMatch::default(),
            found: Mutex::new(None),
        }
    }

    pub fn with_surface(surface: S) -> Self {
        let renderer = Self::new();
        renderer.attach(surface);
        renderer
    }

    pub fn with_pairs(mut self, pairs: &[(KeypointLabel, KeypointLabel)]) -> Self {
        self.pairs = pairs.to_vec();
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_target(mut self, target: Vec2<f32>) -> Self {
        self.target = target;
        self
    }

    pub fn with_target_match(mut self, target_match: TargetMatch) -> Self {
        self.target_match = target_match;
        self
    }

    /// Hand the renderer its surface; replaces any previous one.
    pub fn attach(&self, surface: S) {
        self.lock_surface().replace(surface);
    }

    /// Take the surface away. Later draws are rejected until one is attached again.
    pub fn detach(&self) -> Option<S> {
        self.lock_surface().take()
    }

    pub fn is_ready(&self) -> bool {
        self.lock_surface().is_some()
    }

    /// Borrow the attached surface, e.g. to copy it to a window.
    pub fn with_attached<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.lock_surface().as_mut().map(f)
    }

    pub fn found_position(&self) -> Option<Vec2<f32>> {
        *self.found.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn target(&self) -> Vec2<f32> {
        self.target
    }

    pub fn draw_point(&self, x: f32, y: f32) -> Result<(), RenderError> {
        let mut guard = self.lock_surface();
        let surface = guard.as_mut().ok_or(RenderError::SurfaceNotReady)?;
        surface.draw_point(x, y, POINT_RADIUS, POINT_COLOR);
        Ok(())
    }

    pub fn draw_segment(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let mut guard = self.lock_surface();
        let surface = guard.as_mut().ok_or(RenderError::SurfaceNotReady)?;
        surface.draw_segment(x1, y1, x2, y2, LINE_WIDTH, SEGMENT_COLOR);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), RenderError> {
        let mut guard = self.lock_surface();
        let surface = guard.as_mut().ok_or(RenderError::SurfaceNotReady)?;
        surface.clear();
        Ok(())
    }

    /// Draw a point per confident keypoint and a segment per connected pair
    /// whose two ends are both confident.
    pub fn render_pose(&self, pose: &Pose) -> Result<RenderSummary, RenderError> {
        let mut guard = self.lock_surface();
        let surface = guard.as_mut().ok_or(RenderError::SurfaceNotReady)?;
        let mut summary = RenderSummary::default();

        for keypoint in &pose.keypoints {
            if !keypoint.is_confident(self.min_confidence) {
                summary.skipped += 1;
                continue;
            }

            if self.target_match.matches(keypoint.position, self.target) {
                log::info!("{} found at {}", keypoint.part, keypoint.position);
                summary.found = Some(keypoint.position);
            }

            let Vec2 { x, y } = keypoint.position;
            surface.draw_point(x, y, POINT_RADIUS, POINT_COLOR);
            summary.points += 1;
        }

        for (a, b) in adjacent_keypoints(&pose.keypoints, &self.pairs, self.min_confidence) {
            surface.draw_segment(
                a.position.x,
                a.position.y,
                b.position.x,
                b.position.y,
                LINE_WIDTH,
                SEGMENT_COLOR,
            );
            summary.segments += 1;
        }
        drop(guard);

        if summary.found.is_some() {
            *self.found.lock().unwrap_or_else(|e| e.into_inner()) = summary.found;
        }

        Ok(summary)
    }

    fn lock_surface(&self) -> MutexGuard<'_, Option<S>> {
        self.surface.lock().unwrap_or_else(|e| e.into_inner())
    }
}
