//! 全局输入面：光标、文本选择以及 move/up 监听。
//!
//! 同一时刻只允许一个手势持有。持有者拿到 [`AffordanceGuard`]，
//! guard 被丢弃时（正常结束、组件销毁或 panic 展开）恢复默认状态。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;
use thiserror::Error;
use winit::window::CursorIcon;

lazy_static! {
    static ref GLOBAL_SURFACE: Arc<InputSurface> = Arc::new(InputSurface::default());
}

/// 手势期间被接管的全局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub cursor: CursorIcon,
    pub text_selection: bool,
    pub listening: bool,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            cursor: CursorIcon::Default,
            text_selection: true,
            listening: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("input surface is held by gesture #{0}")]
    Busy(u64),
}

#[derive(Debug, Default)]
struct SurfaceState {
    affordances: Affordances,
    owner: Option<u64>,
    next_token: u64,
}

#[derive(Debug, Default)]
pub struct InputSurface {
    state: Mutex<SurfaceState>,
}

impl InputSurface {
    pub fn global() -> Arc<InputSurface> {
        Arc::clone(&GLOBAL_SURFACE)
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 开始手势：禁用文本选择、显示方向光标、注册监听
    pub fn acquire(self: &Arc<Self>, cursor: CursorIcon) -> Result<AffordanceGuard, SurfaceError> {
        let mut state = self.lock();
        if let Some(owner) = state.owner {
            return Err(SurfaceError::Busy(owner));
        }

        state.next_token += 1;
        let token = state.next_token;
        state.owner = Some(token);
        state.affordances = Affordances {
            cursor,
            text_selection: false,
            listening: true,
        };
        tracing::trace!(token, ?cursor, "input surface acquired");

        Ok(AffordanceGuard {
            surface: Arc::clone(self),
            token,
        })
    }

    pub fn affordances(&self) -> Affordances {
        self.lock().affordances
    }

    pub fn is_held(&self) -> bool {
        self.lock().owner.is_some()
    }

    fn release(&self, token: u64) {
        let mut state = self.lock();
        if state.owner == Some(token) {
            state.owner = None;
            state.affordances = Affordances::default();
            tracing::trace!(token, "input surface released");
        }
    }
}

/// 持有期间全局输入面归当前手势所有
#[derive(Debug)]
pub struct AffordanceGuard {
    surface: Arc<InputSurface>,
    token: u64,
}

impl AffordanceGuard {
    pub fn token(&self) -> u64 {
        self.token
    }
}

impl Drop for AffordanceGuard {
    fn drop(&mut self) {
        self.surface.release(self.token);
    }
}
