// 常量定义
pub mod constants {
    pub const HANDLE_DETECT_SIZE: f32 = 8.0;

    // 默认配置（与宿主页面的默认值一致）
    pub const DEFAULT_X: f32 = 50.0;
    pub const DEFAULT_Y: f32 = 50.0;
    pub const DEFAULT_WIDTH: f32 = 400.0;
    pub const DEFAULT_HEIGHT: f32 = 300.0;
    pub const DEFAULT_MIN_WIDTH: f32 = 200.0;
    pub const DEFAULT_MIN_HEIGHT: f32 = 150.0;
    pub const DEFAULT_MAX_WIDTH: f32 = 800.0;
    pub const DEFAULT_MAX_HEIGHT: f32 = 600.0;

    /// 内容自带控件（如播放条）所占的底部高度
    pub const DEFAULT_CONTROLS_HEIGHT: f32 = 40.0;
}
