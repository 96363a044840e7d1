use posecam_overlay::{Color, OverlayRenderer, RgbSurface, Surface};
use posecam_infer::{Keypoint, KeypointLabel, Pose};

const WHITE: Color = Color::rgb(255, 255, 255);

#[test]
fn test_horizontal_segment() {
    let mut surface = RgbSurface::new(10, 5);
    surface.draw_segment(1.0, 2.0, 8.0, 2.0, 1.0, WHITE);

    for x in 1..=8 {
        assert_eq!(surface.pixel(x, 2), Some(WHITE), "pixel ({x}, 2)");
    }
    assert_eq!(surface.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(surface.pixel(1, 3), Some(Color::BLACK));
}

#[test]
fn test_thick_segment_covers_neighbors() {
    let mut surface = RgbSurface::new(10, 10);
    surface.draw_segment(2.0, 5.0, 7.0, 5.0, 3.0, WHITE);

    for x in 2..=7 {
        assert_eq!(surface.pixel(x, 4), Some(WHITE));
        assert_eq!(surface.pixel(x, 5), Some(WHITE));
        assert_eq!(surface.pixel(x, 6), Some(WHITE));
    }
    assert_eq!(surface.pixel(4, 8), Some(Color::BLACK));
}

#[test]
fn test_segment_clips_to_bounds() {
    let mut surface = RgbSurface::new(10, 10);
    surface.draw_segment(-5.0, 5.0, 15.0, 5.0, 1.0, WHITE);

    for x in 0..10 {
        assert_eq!(surface.pixel(x, 5), Some(WHITE));
    }
}

#[test]
fn test_filled_point() {
    let mut surface = RgbSurface::new(20, 20);
    surface.draw_point(10.0, 10.0, 3.0, Color::GREEN);

    assert_eq!(surface.pixel(10, 10), Some(Color::GREEN));
    assert_eq!(surface.pixel(12, 10), Some(Color::GREEN));
    assert_eq!(surface.pixel(15, 10), Some(Color::BLACK));
}

#[test]
fn test_point_near_corner_clips() {
    let mut surface = RgbSurface::new(10, 10);
    surface.draw_point(1.0, 1.0, 5.0, Color::RED);
    assert_eq!(surface.pixel(1, 1), Some(Color::RED));
    assert_eq!(surface.pixel(9, 9), Some(Color::BLACK));
}

#[test]
fn test_clear_restores_background() {
    let gray = Color::rgb(0xE8, 0xE8, 0xE8);
    let mut surface = RgbSurface::with_background(4, 4, gray);
    surface.draw_point(2.0, 2.0, 1.0, Color::RED);
    surface.clear();
    assert!((0..4).all(|y| (0..4).all(|x| surface.pixel(x, y) == Some(gray))));
}

#[test]
fn test_to_argb() {
    let mut surface = RgbSurface::new(2, 1);
    surface.draw_point(0.0, 0.0, 0.0, Color::RED);
    assert_eq!(surface.to_argb(), vec![0x00FF0000, 0x00000000]);
}

#[test]
fn test_renderer_on_raster() {
    let renderer = OverlayRenderer::with_surface(RgbSurface::new(100, 100));
    let pose = Pose::new(
        vec![
            Keypoint::new(KeypointLabel::LeftShoulder, 20.0, 50.0, 0.8),
            Keypoint::new(KeypointLabel::RightShoulder, 80.0, 50.0, 0.9),
            Keypoint::new(KeypointLabel::Nose, 50.0, 10.0, 0.05),
        ],
        0.9,
    );

    renderer.render_pose(&pose).unwrap();

    renderer
        .with_attached(|surface| {
            // segment drawn after points, so the joint shows the segment color
            assert_eq!(surface.pixel(50, 50), Some(Color::GREEN));
            assert_eq!(surface.pixel(20, 53), Some(Color::RED));
            assert_eq!(surface.pixel(50, 10), Some(Color::BLACK));
        })
        .unwrap();
}

#[test]
fn test_far_off_and_non_finite_coordinates() {
    let mut surface = RgbSurface::new(64, 48);

    surface.draw_segment(-10.0, 5.0, 3.0e9, 5.0, 3.0, Color::GREEN);
    assert_eq!(surface.pixel(0, 5), Some(Color::GREEN));
    assert_eq!(surface.pixel(63, 5), Some(Color::GREEN));

    surface.draw_segment(f32::NEG_INFINITY, -1.0e9, f32::INFINITY, 1.0e9, 3.0, Color::GREEN);
    surface.draw_segment(f32::NAN, 10.0, 20.0, f32::NAN, 3.0, Color::GREEN);
    surface.draw_point(f32::INFINITY, 5.0, 3.0, Color::RED);
    surface.draw_point(-1.0e9, f32::NEG_INFINITY, 3.0, Color::RED);
    surface.draw_point(30.0, 20.0, 1.0e9, Color::RED);

    // The last disc covers the whole raster.
    assert_eq!(surface.pixel(0, 0), Some(Color::RED));
    assert_eq!(surface.pixel(63, 47), Some(Color::RED));
}

#[test]
fn test_renderer_survives_far_off_keypoints() {
    let renderer = OverlayRenderer::with_surface(RgbSurface::new(64, 48));
    let pose = Pose::new(
        vec![
            Keypoint::new(KeypointLabel::LeftShoulder, 3.0e9, 5.0, 0.9),
            Keypoint::new(KeypointLabel::RightShoulder, f32::NEG_INFINITY, 5.0, 0.9),
        ],
        0.9,
    );

    let summary = renderer.render_pose(&pose).unwrap();
    assert_eq!(summary.points, 2);
    assert_eq!(summary.segments, 1);
    let row = renderer.with_attached(|s| s.pixel(32, 5)).flatten();
    assert_eq!(row, Some(Color::GREEN));
}
