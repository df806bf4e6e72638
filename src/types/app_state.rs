use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    Dragging,
    Resizing,
    #[default]
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize handle: {0:?}")]
pub struct UnknownHandle(pub String);

/// 水平或垂直方向上手柄控制的是哪一条边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// 左边 / 上边：尺寸变化需要补偿位置
    Leading,
    /// 右边 / 下边
    Trailing,
}

impl ResizeHandle {
    /// 沿周长顺时针排列，从左上角开始
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::Top,
        ResizeHandle::TopRight,
        ResizeHandle::Right,
        ResizeHandle::BottomRight,
        ResizeHandle::Bottom,
        ResizeHandle::BottomLeft,
        ResizeHandle::Left,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "nw",
            ResizeHandle::Top => "n",
            ResizeHandle::TopRight => "ne",
            ResizeHandle::Right => "e",
            ResizeHandle::BottomRight => "se",
            ResizeHandle::Bottom => "s",
            ResizeHandle::BottomLeft => "sw",
            ResizeHandle::Left => "w",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|handle| handle.id().eq_ignore_ascii_case(id))
    }

    pub fn horizontal_edge(self) -> Option<Edge> {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::Left | ResizeHandle::BottomLeft => {
                Some(Edge::Leading)
            }
            ResizeHandle::TopRight | ResizeHandle::Right | ResizeHandle::BottomRight => {
                Some(Edge::Trailing)
            }
            ResizeHandle::Top | ResizeHandle::Bottom => None,
        }
    }

    pub fn vertical_edge(self) -> Option<Edge> {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::Top | ResizeHandle::TopRight => {
                Some(Edge::Leading)
            }
            ResizeHandle::BottomLeft | ResizeHandle::Bottom | ResizeHandle::BottomRight => {
                Some(Edge::Trailing)
            }
            ResizeHandle::Left | ResizeHandle::Right => None,
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ResizeHandle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownHandle(s.to_string()))
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppState::Dragging => "dragging",
            AppState::Resizing => "resizing",
            AppState::Idle => "idle",
        };
        f.write_str(name)
    }
}
