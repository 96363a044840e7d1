use posecam_base::Tensor;
use posecam_camera::{CameraFrame, ReleaseCounter};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn small_tensor() -> Tensor<u8> {
    Tensor::new(vec![2, 2, 3], vec![7u8; 12]).unwrap()
}

#[test]
fn test_explicit_release_runs_hook_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let frame = CameraFrame::with_release(small_tensor(), move || {
        counted.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(frame.tensor().shape, vec![2, 2, 3]);
    frame.release();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drop_releases_unreleased_frame() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    {
        let _frame = CameraFrame::with_release(small_tensor(), move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_frame_without_hook() {
    let frame = CameraFrame::new(small_tensor());
    assert_eq!(frame.tensor().data.len(), 12);
    frame.release();
}

#[test]
fn test_release_counter_tracks_outstanding() {
    let counter = ReleaseCounter::new();
    let a = counter.track(small_tensor());
    let b = counter.track(small_tensor());
    assert_eq!(counter.acquired(), 2);
    assert_eq!(counter.outstanding(), 2);

    a.release();
    assert_eq!(counter.released(), 1);

    drop(b);
    assert_eq!(counter.released(), 2);
    assert_eq!(counter.outstanding(), 0);
}

#[test]
fn test_debug_reports_release_state() {
    let counter = ReleaseCounter::new();
    let frame = counter.track(small_tensor());
    let text = format!("{:?}", frame);
    assert!(text.contains("released: false"));
    frame.release();
}
