use crate::InferError;
use posecam_base::Tensor;

use super::types::{KEYPOINT_COUNT, Keypoint, KeypointLabel, LetterboxInfo, Pose};

/// Rows per candidate: cx, cy, w, h, score, then (x, y, visibility) per keypoint.
const ROWS: usize = 5 + KEYPOINT_COUNT * 3;

/// Pick the single best pose from raw YOLO-pose output.
///
/// `output` has shape `[1, 56, N]`, one column per candidate. The candidate
/// with the highest score is kept if that score reaches `conf_threshold`;
/// its keypoints are mapped back through `letterbox` into source-frame
/// pixels, and mirrored horizontally when `flip_horizontal` is set.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    conf_threshold: f32,
    flip_horizontal: bool,
) -> Result<Option<Pose>, InferError> {
    if output.shape.len() != 3 || output.shape[0] != 1 || output.shape[1] != ROWS {
        return Err(InferError::ShapeMismatch {
            expected: format!("[1, {}, N]", ROWS),
            got: format!("{:?}", output.shape),
        });
    }

    let n = output.shape[2];
    // element [0, row, col] lives at row * n + col
    let at = |row: usize, col: usize| output.data[row * n + col];

    let best = (0..n)
        .map(|i| (i, at(4, i)))
        .filter(|&(_, score)| score >= conf_threshold)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((col, score)) = best else {
        return Ok(None);
    };

    let keypoints = KeypointLabel::ALL
        .iter()
        .enumerate()
        .map(|(k, &part)| {
            let base = 5 + k * 3;
            let mut x = (at(base, col) - letterbox.pad_x) / letterbox.scale;
            let y = (at(base + 1, col) - letterbox.pad_y) / letterbox.scale;
            if flip_horizontal {
                x = letterbox.source_width - x;
            }
            Keypoint::new(part, x, y, at(base + 2, col))
        })
        .collect();

    Ok(Some(Pose::new(keypoints, score)))
}
