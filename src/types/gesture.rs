use crate::types::{app_state::ResizeHandle, ui::FrameRect};

/// 命中测试结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 框体本身：开始拖拽
    Body,
    /// 八个调整大小手柄之一
    Handle(ResizeHandle),
    /// 内容自带控件或框外区域：不拦截
    PassThrough,
}

/// 宿主为 pointer-down 事件标注的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// 未标注，按坐标做命中测试
    Position,
    Body,
    Content,
    /// 手柄元素携带的方向标识，可能无法识别
    Handle(String),
}

/// 手势开始时的快照，整个手势期间只读
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    pub origin_pointer: (f32, f32),
    pub origin_rect: FrameRect,
    pub active_handle: Option<ResizeHandle>,
}

impl GestureSnapshot {
    pub fn delta(&self, pointer: (f32, f32)) -> (f32, f32) {
        (
            pointer.0 - self.origin_pointer.0,
            pointer.1 - self.origin_pointer.1,
        )
    }
}

impl EventSource {
    pub fn handle(handle: ResizeHandle) -> Self {
        EventSource::Handle(handle.id().to_string())
    }
}
