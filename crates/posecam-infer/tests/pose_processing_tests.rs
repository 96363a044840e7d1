use posecam_base::Tensor;
use posecam_infer::{InferError, KeypointLabel, LetterboxInfo, postprocess, preprocess};

const ROWS: usize = 56;

fn identity_letterbox(width: f32) -> LetterboxInfo {
    LetterboxInfo {
        scale: 1.0,
        pad_x: 0.0,
        pad_y: 0.0,
        source_width: width,
    }
}

/// Build a `[1, 56, n]` output; `fill(row, col)` gives each element.
fn output(n: usize, fill: impl Fn(usize, usize) -> f32) -> Tensor<f32> {
    let mut data = vec![0.0; ROWS * n];
    for row in 0..ROWS {
        for col in 0..n {
            data[row * n + col] = fill(row, col);
        }
    }
    Tensor::new(vec![1, ROWS, n], data).unwrap()
}

#[test]
fn test_preprocess_letterboxes_landscape_frame() {
    let image = Tensor::new(vec![480, 640, 3], vec![255u8; 480 * 640 * 3]).unwrap();
    let (input, letterbox) = preprocess(&image).unwrap();

    assert_eq!(input.shape, vec![1, 3, 640, 640]);
    assert_eq!(letterbox.scale, 1.0);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 80.0);
    assert_eq!(letterbox.source_width, 640.0);

    // padding row stays gray, image rows become 1.0
    assert!((input.data[0] - 114.0 / 255.0).abs() < 1e-6);
    assert_eq!(input.data[80 * 640], 1.0);
}

#[test]
fn test_preprocess_upscales_small_frame() {
    let image = Tensor::new(vec![200, 200, 3], vec![0u8; 200 * 200 * 3]).unwrap();
    let (input, letterbox) = preprocess(&image).unwrap();
    assert_eq!(input.shape, vec![1, 3, 640, 640]);
    assert!((letterbox.scale - 3.2).abs() < 1e-6);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 0.0);
}

#[test]
fn test_preprocess_rejects_bad_shapes() {
    let flat = Tensor::new(vec![640, 640], vec![0u8; 640 * 640]).unwrap();
    assert!(matches!(preprocess(&flat), Err(InferError::ShapeMismatch { .. })));

    let gray = Tensor::new(vec![4, 4, 1], vec![0u8; 16]).unwrap();
    assert!(matches!(preprocess(&gray), Err(InferError::ShapeMismatch { .. })));
}

#[test]
fn test_postprocess_validates_output_shape() {
    let bad = Tensor::new(vec![1, 10, 5], vec![0.0; 50]).unwrap();
    let result = postprocess(&bad, &identity_letterbox(640.0), 0.5, false);
    assert!(matches!(result, Err(InferError::ShapeMismatch { .. })));
}

#[test]
fn test_postprocess_returns_none_below_threshold() {
    let out = output(3, |row, _| if row == 4 { 0.3 } else { 1.0 });
    let pose = postprocess(&out, &identity_letterbox(640.0), 0.5, false).unwrap();
    assert!(pose.is_none());
}

#[test]
fn test_postprocess_empty_output_is_no_detection() {
    let out = Tensor::new(vec![1, ROWS, 0], vec![]).unwrap();
    assert!(postprocess(&out, &identity_letterbox(640.0), 0.5, false).unwrap().is_none());
}

#[test]
fn test_postprocess_keeps_best_candidate() {
    // column 1 scores highest; keypoint k sits at (k * 10 + col, 100 + col)
    let out = output(3, |row, col| match row {
        4 => [0.6, 0.9, 0.7][col],
        r if r >= 5 => match (r - 5) % 3 {
            0 => ((r - 5) / 3 * 10 + col) as f32,
            1 => (100 + col) as f32,
            _ => 0.8,
        },
        _ => 0.0,
    });

    let pose = postprocess(&out, &identity_letterbox(640.0), 0.5, false)
        .unwrap()
        .unwrap();

    assert_eq!(pose.score, 0.9);
    assert_eq!(pose.keypoints.len(), 17);
    let wrist = pose.keypoint(KeypointLabel::LeftWrist).unwrap();
    assert_eq!(wrist.position.x, 91.0);
    assert_eq!(wrist.position.y, 101.0);
    assert_eq!(wrist.score, 0.8);
}

#[test]
fn test_postprocess_rescales_and_flips() {
    let letterbox = LetterboxInfo {
        scale: 0.5,
        pad_x: 0.0,
        pad_y: 80.0,
        source_width: 1280.0,
    };
    let out = output(1, |row, _| match row {
        4 => 0.95,
        5 => 100.0,
        6 => 180.0,
        7 => 0.9,
        _ => 0.0,
    });

    let pose = postprocess(&out, &letterbox, 0.5, true).unwrap().unwrap();
    let nose = pose.keypoint(KeypointLabel::Nose).unwrap();
    assert_eq!(nose.position.x, 1280.0 - 200.0);
    assert_eq!(nose.position.y, 200.0);
}
