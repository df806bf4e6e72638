//! 交互控制器：把指针事件转换为受约束的矩形。
//!
//! 每次 move 都从 pointer-down 时的 [`GestureSnapshot`] 重新计算，
//! 合并或重复的事件不会累积误差。

use std::sync::Arc;

use winit::window::CursorIcon;

use crate::geometry::{constrain_to_screen, handle_anchor, hit_test, resize};
use crate::types::{
    app_state::{AppState, ResizeHandle},
    config::FrameConfig,
    gesture::{EventSource, GestureSnapshot, HitTarget},
    ui::{Bounds, FrameRect},
};
use crate::utils::{
    cursor::CursorManager,
    input_surface::{AffordanceGuard, InputSurface},
};


/// pointer-down 的处理结果，告诉宿主是否拦截该事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Captured(AppState),
    PassThrough,
}

struct Gesture {
    snapshot: GestureSnapshot,
    // 随手势一起丢弃，恢复全局输入面
    _guard: AffordanceGuard,
}

pub struct FrameController {
    rect: FrameRect,
    bounds: Bounds,
    controls_height: f32,
    content_source: String,
    state: AppState,
    gesture: Option<Gesture>,
    surface: Arc<InputSurface>,
}

impl FrameController {
    pub fn new(config: &FrameConfig, container: (f32, f32)) -> Self {
        Self::with_surface(config, container, InputSurface::global())
    }

    pub fn with_surface(
        config: &FrameConfig,
        container: (f32, f32),
        surface: Arc<InputSurface>,
    ) -> Self {
        let bounds = config.bounds(container);
        let initial = FrameRect::new(
            finite_or(config.initial_x, 0.0),
            finite_or(config.initial_y, 0.0),
            bounds.clamp_width(finite_or(config.initial_width, bounds.min_width())),
            bounds.clamp_height(finite_or(config.initial_height, bounds.min_height())),
        );
        let rect = constrain_to_screen(initial, &bounds);
        tracing::debug!(?rect, ?bounds, "frame controller created");

        Self {
            rect,
            bounds,
            controls_height: finite_or(config.controls_height, 0.0).max(0.0),
            content_source: config.content_source.clone(),
            state: AppState::Idle,
            gesture: None,
            surface,
        }
    }

    pub fn rect(&self) -> FrameRect {
        self.rect
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == AppState::Idle
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn content_source(&self) -> &str {
        &self.content_source
    }

    pub fn snapshot(&self) -> Option<&GestureSnapshot> {
        self.gesture.as_ref().map(|gesture| &gesture.snapshot)
    }

    pub fn active_handle(&self) -> Option<ResizeHandle> {
        self.snapshot().and_then(|snapshot| snapshot.active_handle)
    }

    /// 八个手柄当前的绘制位置
    pub fn handle_anchors(&self) -> [(ResizeHandle, (f32, f32)); 8] {
        ResizeHandle::ALL.map(|handle| (handle, handle_anchor(handle, &self.rect)))
    }

    /// 手势进行中返回手势光标，否则按悬停位置决定
    pub fn hover_cursor(&self, pos: (f32, f32)) -> CursorIcon {
        match self.state {
            AppState::Idle => CursorManager::hover_cursor(pos, &self.rect, self.controls_height),
            state => CursorManager::gesture_cursor(state, self.active_handle()),
        }
    }

    fn classify(
        &self,
        pos: (f32, f32),
        source: &EventSource,
    ) -> Option<(AppState, Option<ResizeHandle>)> {
        match source {
            EventSource::Position => {
                match hit_test(pos.0, pos.1, &self.rect, self.controls_height) {
                    HitTarget::Body => Some((AppState::Dragging, None)),
                    HitTarget::Handle(handle) => Some((AppState::Resizing, Some(handle))),
                    HitTarget::PassThrough => None,
                }
            }
            EventSource::Body => Some((AppState::Dragging, None)),
            EventSource::Content => None,
            EventSource::Handle(id) => {
                let handle = ResizeHandle::from_id(id);
                if handle.is_none() {
                    tracing::debug!(id = %id, "unrecognized handle id, resize will be a no-op");
                }
                Some((AppState::Resizing, handle))
            }
        }
    }

    pub fn on_pointer_down(&mut self, pos: (f32, f32), source: EventSource) -> Capture {
        if !is_finite_point(pos) {
            return Capture::PassThrough;
        }

        // 内容区域和控件条始终放行，即使手势正在进行
        let Some((state, active_handle)) = self.classify(pos, &source) else {
            return Capture::PassThrough;
        };
        if !self.is_idle() {
            tracing::debug!(state = %self.state, "pointer-down during active gesture ignored");
            return Capture::Captured(self.state);
        }

        let cursor = CursorManager::gesture_cursor(state, active_handle);
        let guard = match self.surface.acquire(cursor) {
            Ok(guard) => guard,
            Err(e) => {
                tracing::warn!(error = %e, "gesture refused");
                return Capture::PassThrough;
            }
        };

        self.gesture = Some(Gesture {
            snapshot: GestureSnapshot {
                origin_pointer: pos,
                origin_rect: self.rect,
                active_handle,
            },
            _guard: guard,
        });
        self.state = state;
        tracing::debug!(state = %state, handle = ?active_handle, ?pos, "gesture started");

        Capture::Captured(state)
    }

    pub fn on_pointer_move(&mut self, pos: (f32, f32)) -> Option<FrameRect> {
        let snapshot = self.gesture.as_ref()?.snapshot;
        if !is_finite_point(pos) {
            tracing::trace!(?pos, "non-finite pointer position ignored");
            return None;
        }

        let delta = snapshot.delta(pos);
        let next = match self.state {
            AppState::Dragging => constrain_to_screen(
                snapshot.origin_rect.translated(delta.0, delta.1),
                &self.bounds,
            ),
            AppState::Resizing => resize(
                snapshot.origin_rect,
                snapshot.active_handle,
                delta,
                &self.bounds,
            ),
            AppState::Idle => return None,
        };

        tracing::trace!(?delta, rect = ?next, "pointer moved");
        self.rect = next;
        Some(next)
    }

    /// 合并的 move 事件只取最后一个
    pub fn on_pointer_moves<I>(&mut self, batch: I) -> Option<FrameRect>
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let latest = batch.into_iter().filter(|pos| is_finite_point(*pos)).last()?;
        self.on_pointer_move(latest)
    }

    pub fn on_pointer_up(&mut self) -> bool {
        let ended = self.gesture.take().is_some();
        if ended {
            tracing::debug!(state = %self.state, rect = ?self.rect, "gesture ended");
        }
        self.state = AppState::Idle;
        ended
    }

    /// 宿主视口变化：尺寸限制不变，重新做位置限制（缩放进行中除外）
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.bounds = self.bounds.with_container(width, height);
        if self.state != AppState::Resizing {
            self.rect = constrain_to_screen(self.rect, &self.bounds);
        }
        tracing::debug!(container = ?self.bounds.container(), rect = ?self.rect, "container changed");
    }

    /// 当前矩形是否满足容器限制
    pub fn is_within_container(&self) -> bool {
        constrain_to_screen(self.rect, &self.bounds) == self.rect
    }
}

fn is_finite_point(pos: (f32, f32)) -> bool {
    pos.0.is_finite() && pos.1.is_finite()
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
