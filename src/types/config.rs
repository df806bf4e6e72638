//! 组件配置：构造时提供，之后不可变。

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::constants::{
    DEFAULT_CONTROLS_HEIGHT, DEFAULT_HEIGHT, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH,
    DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y,
};
use crate::types::ui::Bounds;

/// 加载框体配置时可能出现的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("I/O error reading {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    /// TOML 语法错误或出现未知字段
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// 内嵌内容的地址，由宿主使用，引擎本身不读取
    pub content_source: String,
    pub initial_x: f32,
    pub initial_y: f32,
    pub initial_width: f32,
    pub initial_height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub controls_height: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            content_source: String::new(),
            initial_x: DEFAULT_X,
            initial_y: DEFAULT_Y,
            initial_width: DEFAULT_WIDTH,
            initial_height: DEFAULT_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            controls_height: DEFAULT_CONTROLS_HEIGHT,
        }
    }
}

impl FrameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded frame config");
        Ok(config)
    }

    pub fn bounds(&self, container: (f32, f32)) -> Bounds {
        Bounds::new(
            self.min_width,
            self.min_height,
            self.max_width,
            self.max_height,
            container.0,
            container.1,
        )
    }
}
