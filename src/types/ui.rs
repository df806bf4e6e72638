use crate::constants::constants::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH,
};

/// 可拖拽 / 缩放的矩形区域
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// 尺寸限制与容器范围
///
/// 通过 [`Bounds::new`] 构造，保证 `0 <= min <= max` 且所有值都是有限数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_width: f32,
    min_height: f32,
    max_width: f32,
    max_height: f32,
    container_width: f32,
    container_height: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.right(), self.bottom())
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (left, top, right, bottom) = self.bounds();
        x >= left && x <= right && y >= top && y <= bottom
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

impl Bounds {
    pub fn new(
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
        container_width: f32,
        container_height: f32,
    ) -> Self {
        let min_width = sanitize("min_width", min_width, DEFAULT_MIN_WIDTH);
        let min_height = sanitize("min_height", min_height, DEFAULT_MIN_HEIGHT);
        let max_width = sanitize("max_width", max_width, DEFAULT_MAX_WIDTH);
        let max_height = sanitize("max_height", max_height, DEFAULT_MAX_HEIGHT);

        // 上下限颠倒时退化为单一取值
        let max_width = collapse_inverted("width", min_width, max_width);
        let max_height = collapse_inverted("height", min_height, max_height);

        Self {
            min_width,
            min_height,
            max_width,
            max_height,
            container_width: sanitize("container_width", container_width, 0.0),
            container_height: sanitize("container_height", container_height, 0.0),
        }
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn container(&self) -> (f32, f32) {
        (self.container_width, self.container_height)
    }

    /// 尺寸限制不变，只替换容器范围
    pub fn with_container(&self, container_width: f32, container_height: f32) -> Self {
        Self {
            container_width: sanitize("container_width", container_width, 0.0),
            container_height: sanitize("container_height", container_height, 0.0),
            ..*self
        }
    }

    pub fn clamp_width(&self, width: f32) -> f32 {
        width.max(self.min_width).min(self.max_width)
    }

    pub fn clamp_height(&self, height: f32) -> f32 {
        height.max(self.min_height).min(self.max_height)
    }
}

fn sanitize(name: &str, value: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!(field = name, value, fallback, "non-finite bound replaced");
        fallback
    } else if value < 0.0 {
        tracing::warn!(field = name, value, "negative bound raised to zero");
        0.0
    } else {
        value
    }
}

fn collapse_inverted(axis: &str, min: f32, max: f32) -> f32 {
    if min > max {
        tracing::warn!(axis, min, max, "inverted size limits collapsed to minimum");
        min
    } else {
        max
    }
}
