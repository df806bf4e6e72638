use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn sample_bounds() -> Bounds {
    Bounds::new(250.0, 150.0, 800.0, 600.0, 1280.0, 720.0)
}

fn sample_origin() -> FrameRect {
    FrameRect::new(50.0, 50.0, 500.0, 300.0)
}

/// 缩放时保持不动的点：拖动手柄的对侧
fn fixed_point(handle: ResizeHandle, rect: &FrameRect) -> (f32, f32) {
    let (left, top, right, bottom) = rect.bounds();
    let (center_x, center_y) = rect.center();
    let x = match handle.horizontal_edge() {
        Some(Edge::Leading) => right,
        Some(Edge::Trailing) => left,
        None => center_x,
    };
    let y = match handle.vertical_edge() {
        Some(Edge::Leading) => bottom,
        Some(Edge::Trailing) => top,
        None => center_y,
    };
    (x, y)
}

#[rstest]
#[case(ResizeHandle::Right, (30.0, 99.0), FrameRect::new(50.0, 50.0, 530.0, 300.0))]
#[case(ResizeHandle::Left, (30.0, 99.0), FrameRect::new(80.0, 50.0, 470.0, 300.0))]
#[case(ResizeHandle::Top, (99.0, 20.0), FrameRect::new(50.0, 70.0, 500.0, 280.0))]
#[case(ResizeHandle::Bottom, (99.0, 20.0), FrameRect::new(50.0, 50.0, 500.0, 320.0))]
#[case(ResizeHandle::TopRight, (30.0, 20.0), FrameRect::new(50.0, 70.0, 530.0, 280.0))]
#[case(ResizeHandle::TopLeft, (30.0, 20.0), FrameRect::new(80.0, 70.0, 470.0, 280.0))]
#[case(ResizeHandle::BottomRight, (30.0, 20.0), FrameRect::new(50.0, 50.0, 530.0, 320.0))]
#[case(ResizeHandle::BottomLeft, (30.0, 20.0), FrameRect::new(80.0, 50.0, 470.0, 320.0))]
fn resize_follows_handle_table(
    #[case] handle: ResizeHandle,
    #[case] delta: (f32, f32),
    #[case] expected: FrameRect,
) {
    assert_eq!(resize(sample_origin(), Some(handle), delta, &sample_bounds()), expected);
}

#[test]
fn se_resize_clamps_to_max_and_keeps_position() {
    let next = resize(
        sample_origin(),
        Some(ResizeHandle::BottomRight),
        (400.0, 400.0),
        &sample_bounds(),
    );
    assert_eq!(next, FrameRect::new(50.0, 50.0, 800.0, 600.0));
}

#[test]
fn nw_resize_is_not_clamped_to_viewport() {
    let next = resize(
        sample_origin(),
        Some(ResizeHandle::TopLeft),
        (-1000.0, -1000.0),
        &sample_bounds(),
    );
    assert_eq!(next.size(), (800.0, 600.0));
    // 缩放路径不做视口限制，位置可以为负
    assert_eq!((next.x, next.y), (-250.0, -250.0));
    assert_eq!((next.right(), next.bottom()), (550.0, 350.0));
}

#[test]
fn nw_resize_below_minimum_keeps_bottom_right_fixed() {
    let next = resize(
        sample_origin(),
        Some(ResizeHandle::TopLeft),
        (1000.0, 1000.0),
        &sample_bounds(),
    );
    assert_eq!(next, FrameRect::new(300.0, 200.0, 250.0, 150.0));
}

#[test]
fn leading_edge_resize_keeps_fractional_right_edge() {
    let origin = FrameRect::new(464.51, 0.0, 253.45, 300.0);
    let next = resize(origin, Some(ResizeHandle::Left), (-30.53, 0.0), &sample_bounds());
    assert_eq!(next.width, origin.width + 30.53);
    assert_eq!(next.right(), origin.right());
}

#[test]
fn leading_edge_resize_keeps_fractional_bottom_edge() {
    let origin = FrameRect::new(0.0, 464.51, 500.0, 253.45);
    let next = resize(origin, Some(ResizeHandle::Top), (0.0, -30.53), &sample_bounds());
    assert_eq!(next.bottom(), origin.bottom());
}

#[test]
fn nw_resize_keeps_fractional_bottom_right() {
    let origin = FrameRect::new(464.51, 113.4, 253.45, 565.92);
    let next = resize(
        origin,
        Some(ResizeHandle::TopLeft),
        (-30.53, 88.58),
        &sample_bounds(),
    );
    assert_eq!((next.right(), next.bottom()), (origin.right(), origin.bottom()));
}

#[test]
fn unknown_handle_resize_is_identity() {
    let origin = sample_origin();
    assert_eq!(resize(origin, None, (120.0, -80.0), &sample_bounds()), origin);
}

#[test]
fn degenerate_limits_pin_size() {
    let bounds = Bounds::new(900.0, 300.0, 100.0, 300.0, 1280.0, 720.0);
    let next = resize(
        sample_origin(),
        Some(ResizeHandle::BottomLeft),
        (-40.0, 75.0),
        &bounds,
    );
    assert_eq!(next.size(), (900.0, 300.0));
    assert_eq!(next.right(), sample_origin().right());
}

#[test]
fn constrain_keeps_rect_inside_container() {
    let bounds = sample_bounds();
    let moved = constrain_to_screen(FrameRect::new(-30.0, 600.0, 500.0, 300.0), &bounds);
    assert_eq!(moved, FrameRect::new(0.0, 420.0, 500.0, 300.0));

    let moved = constrain_to_screen(FrameRect::new(1000.0, -5.0, 500.0, 300.0), &bounds);
    assert_eq!(moved, FrameRect::new(780.0, 0.0, 500.0, 300.0));
}

#[test]
fn constrain_oversized_rect_falls_back_to_origin() {
    let bounds = Bounds::new(250.0, 150.0, 800.0, 600.0, 400.0, 200.0);
    let moved = constrain_to_screen(FrameRect::new(120.0, 80.0, 500.0, 300.0), &bounds);
    assert_eq!(moved, FrameRect::new(0.0, 0.0, 500.0, 300.0));
}

#[test]
fn corner_handles_win_over_edges() {
    let rect = FrameRect::new(100.0, 100.0, 20.0, 20.0);
    // 矩形很小时边手柄区域与角重叠，角优先
    assert_eq!(get_resize_handle(104.0, 100.0, &rect), Some(ResizeHandle::TopLeft));
    assert_eq!(get_resize_handle(110.0, 100.0, &rect), Some(ResizeHandle::Top));
    assert_eq!(get_resize_handle(110.0, 110.0, &rect), None);
}

#[test]
fn every_handle_is_hit_at_its_anchor() {
    let rect = sample_origin();
    for handle in ResizeHandle::ALL {
        let (x, y) = handle_anchor(handle, &rect);
        assert_eq!(get_resize_handle(x, y, &rect), Some(handle));
        assert_eq!(hit_test(x, y, &rect, 40.0), HitTarget::Handle(handle));
    }
}

#[test]
fn fixed_point_is_opposite_handle() {
    let rect = sample_origin();
    assert_eq!(fixed_point(ResizeHandle::TopLeft, &rect), (550.0, 350.0));
    assert_eq!(fixed_point(ResizeHandle::BottomRight, &rect), (50.0, 50.0));
    assert_eq!(fixed_point(ResizeHandle::Top, &rect), (300.0, 350.0));
    assert_eq!(fixed_point(ResizeHandle::Right, &rect), (50.0, 200.0));
}

#[rstest]
#[case((300.0, 150.0), HitTarget::Body)]
#[case((300.0, 330.0), HitTarget::PassThrough)]
#[case((10.0, 10.0), HitTarget::PassThrough)]
#[case((700.0, 200.0), HitTarget::PassThrough)]
fn hit_test_separates_body_from_content(#[case] pos: (f32, f32), #[case] expected: HitTarget) {
    assert_eq!(hit_test(pos.0, pos.1, &sample_origin(), 40.0), expected);
}

#[test]
fn hit_test_without_controls_strip() {
    assert_eq!(hit_test(300.0, 340.0, &sample_origin(), 0.0), HitTarget::Body);
}

fn arb_handle() -> impl Strategy<Value = ResizeHandle> {
    prop::sample::select(ResizeHandle::ALL.to_vec())
}

// 1/16 像素网格：带小数，但加减在 f32 中是精确的
fn grid(v: i32) -> f32 {
    v as f32 / 16.0
}

fn arb_delta() -> impl Strategy<Value = (f32, f32)> {
    (-32_000i32..32_000, -32_000i32..32_000).prop_map(|(dx, dy)| (grid(dx), grid(dy)))
}

fn arb_origin() -> impl Strategy<Value = FrameRect> {
    (0i32..12_800, 0i32..6_400, 4_000i32..=12_800, 2_400i32..=9_600)
        .prop_map(|(x, y, w, h)| FrameRect::new(grid(x), grid(y), grid(w), grid(h)))
}

proptest! {
    #[test]
    fn prop_resize_respects_size_limits(
        origin in arb_origin(),
        handle in arb_handle(),
        deltas in prop::collection::vec(arb_delta(), 1..16),
    ) {
        let bounds = sample_bounds();
        for delta in deltas {
            let next = resize(origin, Some(handle), delta, &bounds);
            prop_assert!(next.width >= bounds.min_width() && next.width <= bounds.max_width());
            prop_assert!(next.height >= bounds.min_height() && next.height <= bounds.max_height());
        }
    }

    #[test]
    fn prop_resize_keeps_opposite_anchor_fixed(
        origin in arb_origin(),
        handle in arb_handle(),
        delta in arb_delta(),
    ) {
        let next = resize(origin, Some(handle), delta, &sample_bounds());
        let before = fixed_point(handle, &origin);
        let after = fixed_point(handle, &next);
        // 边手柄的锚点在另一轴上取中点，只比较被固定的那一轴
        if handle.horizontal_edge().is_some() {
            prop_assert_eq!(before.0, after.0);
        }
        if handle.vertical_edge().is_some() {
            prop_assert_eq!(before.1, after.1);
        }
    }

    #[test]
    fn prop_se_resize_never_moves_origin(origin in arb_origin(), delta in arb_delta()) {
        let next = resize(origin, Some(ResizeHandle::BottomRight), delta, &sample_bounds());
        prop_assert_eq!((next.x, next.y), (origin.x, origin.y));
    }

    #[test]
    fn prop_constrain_stays_in_container(
        origin in arb_origin(),
        delta in arb_delta(),
    ) {
        let bounds = sample_bounds();
        let moved = constrain_to_screen(origin.translated(delta.0, delta.1), &bounds);
        prop_assert!(moved.x >= 0.0 && moved.right() <= bounds.container_width());
        prop_assert!(moved.y >= 0.0 && moved.bottom() <= bounds.container_height());
        prop_assert_eq!(moved.size(), origin.size());
    }
}
