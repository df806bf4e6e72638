//! 视口内矩形框的拖拽与缩放引擎。
//!
//! [`FrameController`] 处理指针事件，使 [`FrameRect`] 保持在尺寸限制内；
//! 拖拽时还会限制在容器范围内。

pub mod constants;
pub mod controller;
pub mod geometry;
pub mod script;
pub mod types;
pub mod utils;

pub use controller::{Capture, FrameController};
pub use types::{
    app_state::{AppState, ResizeHandle},
    config::{ConfigError, FrameConfig},
    gesture::{EventSource, GestureSnapshot, HitTarget},
    ui::{Bounds, FrameRect},
};
