use crate::{
    constants::constants::HANDLE_DETECT_SIZE,
    types::{
        app_state::{Edge, ResizeHandle},
        gesture::HitTarget,
        ui::{Bounds, FrameRect},
    },
};

#[cfg(test)]
mod tests;

pub fn point_in_rect(x: f32, y: f32, rect: &FrameRect) -> bool {
    rect.contains(x, y)
}

pub fn get_resize_handle(x: f32, y: f32, rect: &FrameRect) -> Option<ResizeHandle> {
    let (left, top, right, bottom) = rect.bounds();
    let (center_x, center_y) = rect.center();

    let near = |px: f32, py: f32| {
        (x - px).abs() <= HANDLE_DETECT_SIZE && (y - py).abs() <= HANDLE_DETECT_SIZE
    };

    // 检查角手柄（优先级最高）
    for (handle, corner) in [
        (ResizeHandle::TopLeft, (left, top)),
        (ResizeHandle::TopRight, (right, top)),
        (ResizeHandle::BottomRight, (right, bottom)),
        (ResizeHandle::BottomLeft, (left, bottom)),
    ] {
        if near(corner.0, corner.1) {
            return Some(handle);
        }
    }

    // 检查边手柄（确保不与角手柄重叠）
    let clear_of_x_corners =
        (x - left).abs() > HANDLE_DETECT_SIZE && (x - right).abs() > HANDLE_DETECT_SIZE;
    let clear_of_y_corners =
        (y - top).abs() > HANDLE_DETECT_SIZE && (y - bottom).abs() > HANDLE_DETECT_SIZE;

    if near(center_x, top) && clear_of_x_corners {
        return Some(ResizeHandle::Top);
    }
    if near(right, center_y) && clear_of_y_corners {
        return Some(ResizeHandle::Right);
    }
    if near(center_x, bottom) && clear_of_x_corners {
        return Some(ResizeHandle::Bottom);
    }
    if near(left, center_y) && clear_of_y_corners {
        return Some(ResizeHandle::Left);
    }

    None
}

/// 手柄在周长上的绘制位置
pub fn handle_anchor(handle: ResizeHandle, rect: &FrameRect) -> (f32, f32) {
    let (left, top, right, bottom) = rect.bounds();
    let (center_x, center_y) = rect.center();

    match handle {
        ResizeHandle::TopLeft => (left, top),
        ResizeHandle::Top => (center_x, top),
        ResizeHandle::TopRight => (right, top),
        ResizeHandle::Right => (right, center_y),
        ResizeHandle::BottomRight => (right, bottom),
        ResizeHandle::Bottom => (center_x, bottom),
        ResizeHandle::BottomLeft => (left, bottom),
        ResizeHandle::Left => (left, center_y),
    }
}

/// 将 pointer-down 位置映射为手势类型
///
/// 手柄优先于框体；框体底部 `controls_height` 高度的区域留给内容自带控件。
pub fn hit_test(x: f32, y: f32, rect: &FrameRect, controls_height: f32) -> HitTarget {
    if let Some(handle) = get_resize_handle(x, y, rect) {
        return HitTarget::Handle(handle);
    }
    if !point_in_rect(x, y, rect) {
        return HitTarget::PassThrough;
    }

    let controls_top = rect.bottom() - controls_height.max(0.0).min(rect.height);
    if controls_height > 0.0 && y >= controls_top {
        HitTarget::PassThrough
    } else {
        HitTarget::Body
    }
}

/// 拖拽时把位置限制在容器内，尺寸不变
///
/// 框体比容器大时上限为 0，位置固定到 0。
pub fn constrain_to_screen(rect: FrameRect, bounds: &Bounds) -> FrameRect {
    let (screen_w, screen_h) = bounds.container();
    let max_x = (screen_w - rect.width).max(0.0);
    let max_y = (screen_h - rect.height).max(0.0);

    FrameRect {
        x: rect.x.max(0.0).min(max_x),
        y: rect.y.max(0.0).min(max_y),
        ..rect
    }
}

/// 按手柄方向缩放，相对的边 / 角保持不动
///
/// 先把宽高限制在 `[min, max]`，再计算位置补偿。缩放不受容器范围限制。
/// 无法识别的手柄（`None`）返回原矩形。
pub fn resize(
    origin: FrameRect,
    handle: Option<ResizeHandle>,
    delta: (f32, f32),
    bounds: &Bounds,
) -> FrameRect {
    let Some(handle) = handle else {
        return origin;
    };
    let (dx, dy) = delta;
    let mut next = origin;

    match handle.horizontal_edge() {
        Some(Edge::Leading) => {
            next.width = bounds.clamp_width(origin.width - dx);
            // 从固定的右边反推，避免小数坐标下右边漂移
            next.x = origin.right() - next.width;
        }
        Some(Edge::Trailing) => {
            next.width = bounds.clamp_width(origin.width + dx);
        }
        None => {}
    }

    match handle.vertical_edge() {
        Some(Edge::Leading) => {
            next.height = bounds.clamp_height(origin.height - dy);
            next.y = origin.bottom() - next.height;
        }
        Some(Edge::Trailing) => {
            next.height = bounds.clamp_height(origin.height + dy);
        }
        None => {}
    }

    next
}
