use winit::window::CursorIcon;

use crate::geometry::hit_test;
use crate::types::{
    app_state::{AppState, ResizeHandle},
    gesture::HitTarget,
    ui::FrameRect,
};

pub fn resize_handle_to_cursor(handle: ResizeHandle) -> CursorIcon {
    match handle {
        ResizeHandle::TopLeft | ResizeHandle::BottomRight => CursorIcon::NwResize,
        ResizeHandle::TopRight | ResizeHandle::BottomLeft => CursorIcon::NeResize,
        ResizeHandle::Top | ResizeHandle::Bottom => CursorIcon::NsResize,
        ResizeHandle::Left | ResizeHandle::Right => CursorIcon::EwResize,
    }
}

/// 光标管理器
pub struct CursorManager;

impl CursorManager {
    /// 手势进行中显示的光标
    pub fn gesture_cursor(app_state: AppState, handle: Option<ResizeHandle>) -> CursorIcon {
        match app_state {
            AppState::Dragging => CursorIcon::Grabbing,
            // 无法识别的手柄沿用默认的斜向光标
            AppState::Resizing => handle.map_or(CursorIcon::NwResize, resize_handle_to_cursor),
            AppState::Idle => CursorIcon::Default,
        }
    }

    /// 获取空闲状态时的光标
    pub fn hover_cursor(
        mouse_pos: (f32, f32),
        rect: &FrameRect,
        controls_height: f32,
    ) -> CursorIcon {
        let (x, y) = mouse_pos;
        match hit_test(x, y, rect, controls_height) {
            HitTarget::Handle(handle) => resize_handle_to_cursor(handle),
            HitTarget::Body => CursorIcon::Grab,
            HitTarget::PassThrough => CursorIcon::Default,
        }
    }
}
