use crate::InferError;
use posecam_base::Tensor;

use super::types::LetterboxInfo;

pub(crate) const TARGET_SIZE: usize = 640;
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Prepare an HWC RGB frame for a 640x640 YOLO-pose model.
///
/// Letterboxes to 640x640 keeping the aspect ratio (nearest-neighbor resize,
/// gray padding), transposes to NCHW and rescales to [0.0, 1.0]. Returns the
/// `[1, 3, 640, 640]` input and the parameters needed to map outputs back.
pub fn preprocess(image: &Tensor<u8>) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    let (h, w, c) = image.image_dims().ok_or_else(|| InferError::ShapeMismatch {
        expected: "[H, W, 3]".to_string(),
        got: format!("{:?}", image.shape),
    })?;
    if c != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "3 channels".to_string(),
            got: format!("{} channels", c),
        });
    }
    if h == 0 || w == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty image".to_string(),
            got: format!("{:?}", image.shape),
        });
    }

    let scale = (TARGET_SIZE as f32 / w as f32).min(TARGET_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).min(TARGET_SIZE);
    let new_h = ((h as f32 * scale) as usize).min(TARGET_SIZE);
    let pad_x = (TARGET_SIZE - new_w) / 2;
    let pad_y = (TARGET_SIZE - new_h) / 2;

    let plane = TARGET_SIZE * TARGET_SIZE;
    let mut nchw = vec![PAD_VALUE; 3 * plane];

    for y in 0..new_h {
        let src_y = ((y as f32 / scale) as usize).min(h - 1);
        for x in 0..new_w {
            let src_x = ((x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            let dst = (y + pad_y) * TARGET_SIZE + (x + pad_x);
            for ch in 0..3 {
                nchw[ch * plane + dst] = image.data[src + ch] as f32 / 255.0;
            }
        }
    }

    let input = Tensor::new(vec![1, 3, TARGET_SIZE, TARGET_SIZE], nchw)?;

    Ok((
        input,
        LetterboxInfo {
            scale,
            pad_x: pad_x as f32,
            pad_y: pad_y as f32,
            source_width: w as f32,
        },
    ))
}
