use posecam_base::Vec2;
use posecam_infer::{CONNECTED_PARTS, Keypoint, KeypointLabel, Pose};
use posecam_overlay::{
    Color, DrawCommand, OverlayRenderer, RecordingSurface, RenderError, TargetMatch,
    default_target,
};

use KeypointLabel::*;

fn recorded(renderer: &OverlayRenderer<RecordingSurface>) -> RecordingSurface {
    renderer.detach().expect("surface attached")
}

#[test]
fn test_confident_point_drawn_unconfident_skipped() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new())
        .with_pairs(&[(Nose, LeftEye)]);
    let pose = Pose::new(
        vec![
            Keypoint::new(Nose, 10.0, 20.0, 0.9),
            Keypoint::new(LeftEye, 12.0, 18.0, 0.05),
        ],
        0.9,
    );

    let summary = renderer.render_pose(&pose).unwrap();

    assert_eq!(summary.points, 1);
    assert_eq!(summary.segments, 0);
    assert_eq!(summary.skipped, 1);
    let surface = recorded(&renderer);
    assert_eq!(surface.points(), vec![(10.0, 20.0)]);
    assert!(surface.segments().is_empty());
}

#[test]
fn test_point_style() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new());
    renderer.draw_point(4.0, 5.0).unwrap();
    renderer.draw_segment(1.0, 2.0, 3.0, 4.0).unwrap();

    let surface = recorded(&renderer);
    assert_eq!(
        surface.commands,
        vec![
            DrawCommand::Point {
                x: 4.0,
                y: 5.0,
                radius: 3.0,
                color: Color::RED
            },
            DrawCommand::Segment {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                width: 3.0,
                color: Color::rgb(0, 255, 0)
            },
        ]
    );
}

#[test]
fn test_threshold_is_inclusive() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new())
        .with_pairs(&[(LeftShoulder, RightShoulder)]);
    let pose = Pose::new(
        vec![
            Keypoint::new(LeftShoulder, 100.0, 50.0, 0.1),
            Keypoint::new(RightShoulder, 160.0, 52.0, 0.0999),
        ],
        0.7,
    );

    renderer.render_pose(&pose).unwrap();

    let surface = recorded(&renderer);
    assert_eq!(surface.points(), vec![(100.0, 50.0)]);
    assert!(surface.segments().is_empty());
}

#[test]
fn test_every_confident_keypoint_drawn_once_at_exact_position() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new());
    let keypoints: Vec<_> = KeypointLabel::ALL
        .iter()
        .enumerate()
        .map(|(i, &part)| {
            let score = if i % 3 == 0 { 0.02 } else { 0.5 + i as f32 * 0.01 };
            Keypoint::new(part, 10.5 + i as f32, 200.25 - i as f32, score)
        })
        .collect();
    let pose = Pose::new(keypoints.clone(), 0.8);

    renderer.render_pose(&pose).unwrap();

    let points = recorded(&renderer).points();
    for kp in &keypoints {
        let hits = points
            .iter()
            .filter(|&&(x, y)| x == kp.position.x && y == kp.position.y)
            .count();
        let expected = if kp.score >= 0.1 { 1 } else { 0 };
        assert_eq!(hits, expected, "{} drawn {} times", kp.part, hits);
    }
}

#[test]
fn test_segments_follow_pair_order_and_confidence() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new());
    let pose = Pose::new(
        vec![
            Keypoint::new(LeftShoulder, 100.0, 100.0, 0.9),
            Keypoint::new(RightShoulder, 200.0, 100.0, 0.9),
            Keypoint::new(LeftElbow, 90.0, 150.0, 0.9),
            Keypoint::new(LeftWrist, 85.0, 200.0, 0.01),
            Keypoint::new(LeftHip, 110.0, 220.0, 0.6),
        ],
        0.8,
    );

    let summary = renderer.render_pose(&pose).unwrap();

    let segments = recorded(&renderer).segments();
    assert_eq!(summary.segments, 3);
    assert_eq!(
        segments,
        vec![
            ((110.0, 220.0), (100.0, 100.0)), // leftHip -> leftShoulder
            ((90.0, 150.0), (100.0, 100.0)),  // leftElbow -> leftShoulder
            ((100.0, 100.0), (200.0, 100.0)), // leftShoulder -> rightShoulder
        ]
    );
    assert_eq!(CONNECTED_PARTS[0], (LeftHip, LeftShoulder));
}

#[test]
fn test_render_never_clears() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new());
    let pose = Pose::new(vec![Keypoint::new(Nose, 1.0, 1.0, 0.9)], 0.9);

    renderer.render_pose(&pose).unwrap();
    renderer.render_pose(&pose).unwrap();

    let surface = recorded(&renderer);
    assert_eq!(surface.points().len(), 2);
    assert!(!surface.commands.contains(&DrawCommand::Clear));
}

#[test]
fn test_detached_surface_rejects_drawing() {
    let renderer: OverlayRenderer<RecordingSurface> = OverlayRenderer::new();
    let pose = Pose::new(vec![Keypoint::new(Nose, 1.0, 1.0, 0.9)], 0.9);

    assert!(!renderer.is_ready());
    assert_eq!(renderer.render_pose(&pose), Err(RenderError::SurfaceNotReady));
    assert_eq!(renderer.draw_point(1.0, 1.0), Err(RenderError::SurfaceNotReady));
    assert_eq!(renderer.clear(), Err(RenderError::SurfaceNotReady));

    renderer.attach(RecordingSurface::new());
    assert!(renderer.render_pose(&pose).is_ok());
    assert_eq!(recorded(&renderer).points().len(), 1);
    assert!(!renderer.is_ready());
}

#[test]
fn test_exact_target_match() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new());
    let target = default_target();

    let near = Pose::new(vec![Keypoint::new(RightWrist, target.x + 0.001, target.y, 0.9)], 0.9);
    assert_eq!(renderer.render_pose(&near).unwrap().found, None);
    assert_eq!(renderer.found_position(), None);

    let exact = Pose::new(vec![Keypoint::new(RightWrist, target.x, target.y, 0.9)], 0.9);
    assert_eq!(renderer.render_pose(&exact).unwrap().found, Some(target));
    assert_eq!(renderer.found_position(), Some(target));
}

#[test]
fn test_unconfident_keypoint_never_matches_target() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new())
        .with_target(Vec2::new(5.0, 5.0));
    let pose = Pose::new(vec![Keypoint::new(LeftWrist, 5.0, 5.0, 0.05)], 0.9);
    assert_eq!(renderer.render_pose(&pose).unwrap().found, None);
}

#[test]
fn test_within_target_match() {
    let renderer = OverlayRenderer::with_surface(RecordingSurface::new())
        .with_target(Vec2::new(50.0, 50.0))
        .with_target_match(TargetMatch::Within(2.0));
    let pose = Pose::new(vec![Keypoint::new(LeftWrist, 51.0, 51.0, 0.9)], 0.9);

    assert_eq!(renderer.render_pose(&pose).unwrap().found, Some(Vec2::new(51.0, 51.0)));
}
