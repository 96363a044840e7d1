use super::types::{Keypoint, KeypointLabel};

use KeypointLabel::*;

/// Pairs of body parts joined by a segment when both are confidently detected.
pub const CONNECTED_PARTS: [(KeypointLabel, KeypointLabel); 12] = [
    (LeftHip, LeftShoulder),
    (LeftElbow, LeftShoulder),
    (LeftElbow, LeftWrist),
    (LeftHip, LeftKnee),
    (LeftKnee, LeftAnkle),
    (RightHip, RightShoulder),
    (RightElbow, RightShoulder),
    (RightElbow, RightWrist),
    (RightHip, RightKnee),
    (RightKnee, RightAnkle),
    (LeftShoulder, RightShoulder),
    (LeftHip, RightHip),
];

/// For each pair in `pairs` whose two parts both appear in `keypoints` with a
/// score of at least `min_confidence`, the two keypoints in pair order.
///
/// A part that appears more than once uses its first occurrence.
pub fn adjacent_keypoints<'a>(
    keypoints: &'a [Keypoint],
    pairs: &[(KeypointLabel, KeypointLabel)],
    min_confidence: f32,
) -> Vec<(&'a Keypoint, &'a Keypoint)> {
    let confident = |part: KeypointLabel| {
        keypoints
            .iter()
            .find(|kp| kp.part == part)
            .filter(|kp| kp.is_confident(min_confidence))
    };

    pairs
        .iter()
        .filter_map(|&(a, b)| Some((confident(a)?, confident(b)?)))
        .collect()
}
