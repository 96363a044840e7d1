use posecam_base::Vec2;
use std::fmt;
use std::str::FromStr;

/// Number of body parts a pose model reports.
pub const KEYPOINT_COUNT: usize = 17;

/// Body part names, in model output order (COCO / PoseNet order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypointLabel {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointLabel {
    pub const ALL: [KeypointLabel; KEYPOINT_COUNT] = [
        KeypointLabel::Nose,
        KeypointLabel::LeftEye,
        KeypointLabel::RightEye,
        KeypointLabel::LeftEar,
        KeypointLabel::RightEar,
        KeypointLabel::LeftShoulder,
        KeypointLabel::RightShoulder,
        KeypointLabel::LeftElbow,
        KeypointLabel::RightElbow,
        KeypointLabel::LeftWrist,
        KeypointLabel::RightWrist,
        KeypointLabel::LeftHip,
        KeypointLabel::RightHip,
        KeypointLabel::LeftKnee,
        KeypointLabel::RightKnee,
        KeypointLabel::LeftAnkle,
        KeypointLabel::RightAnkle,
    ];

    /// The camelCase part name, e.g. `leftShoulder`.
    pub fn name(self) -> &'static str {
        match self {
            KeypointLabel::Nose => "nose",
            KeypointLabel::LeftEye => "leftEye",
            KeypointLabel::RightEye => "rightEye",
            KeypointLabel::LeftEar => "leftEar",
            KeypointLabel::RightEar => "rightEar",
            KeypointLabel::LeftShoulder => "leftShoulder",
            KeypointLabel::RightShoulder => "rightShoulder",
            KeypointLabel::LeftElbow => "leftElbow",
            KeypointLabel::RightElbow => "rightElbow",
            KeypointLabel::LeftWrist => "leftWrist",
            KeypointLabel::RightWrist => "rightWrist",
            KeypointLabel::LeftHip => "leftHip",
            KeypointLabel::RightHip => "rightHip",
            KeypointLabel::LeftKnee => "leftKnee",
            KeypointLabel::RightKnee => "rightKnee",
            KeypointLabel::LeftAnkle => "leftAnkle",
            KeypointLabel::RightAnkle => "rightAnkle",
        }
    }
}

impl From<KeypointLabel> for usize {
    fn from(label: KeypointLabel) -> usize {
        label as usize
    }
}

impl TryFrom<usize> for KeypointLabel {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        KeypointLabel::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid keypoint index: {}. Must be in range 0-{}.",
                value,
                KEYPOINT_COUNT - 1
            )
        })
    }
}

impl FromStr for KeypointLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeypointLabel::ALL
            .iter()
            .copied()
            .find(|label| label.name() == s)
            .ok_or_else(|| format!("unknown body part: {s}"))
    }
}

impl fmt::Display for KeypointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One detected body part, in frame-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub part: KeypointLabel,
    pub position: Vec2<f32>,
    /// Confidence in [0.0, 1.0].
    pub score: f32,
}

impl Keypoint {
    pub fn new(part: KeypointLabel, x: f32, y: f32, score: f32) -> Self {
        Self {
            part,
            position: Vec2::new(x, y),
            score,
        }
    }

    pub fn is_confident(&self, min_confidence: f32) -> bool {
        self.score >= min_confidence
    }
}

/// The keypoints of the single subject found in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
    pub score: f32,
}

impl Pose {
    pub fn new(keypoints: Vec<Keypoint>, score: f32) -> Self {
        Self { keypoints, score }
    }

    pub fn keypoint(&self, part: KeypointLabel) -> Option<&Keypoint> {
        self.keypoints.iter().find(|kp| kp.part == part)
    }
}

/// Letterbox transformation parameters for coordinate rescaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxInfo {
    /// min(640 / H, 640 / W)
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    /// Width of the frame before letterboxing, used to mirror x.
    pub source_width: f32,
}
