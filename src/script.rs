//! 指针事件脚本：用于演示程序回放一段手势。
//!
//! ```text
//! # 注释
//! container 1280 720
//! down 300 200 body
//! move 340 260
//! up
//! ```

use thiserror::Error;

use crate::controller::FrameController;
use crate::types::gesture::EventSource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Invalid { line: usize, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Container(f32, f32),
    Down((f32, f32), EventSource),
    Move((f32, f32)),
    Up,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let invalid = |message: String| ScriptError::Invalid { line, message };
        let words: Vec<&str> = text.split_whitespace().collect();

        let command = match words.as_slice() {
            ["container", w, h] => {
                ScriptCommand::Container(number(w).map_err(invalid)?, number(h).map_err(invalid)?)
            }
            ["down", x, y, rest @ ..] => {
                let pos = (number(x).map_err(invalid)?, number(y).map_err(invalid)?);
                let source = match rest {
                    [] | ["auto"] => EventSource::Position,
                    ["body"] => EventSource::Body,
                    ["content"] => EventSource::Content,
                    [tag] => match tag.strip_prefix("handle=") {
                        Some(id) => EventSource::Handle(id.to_string()),
                        None => return Err(invalid(format!("unknown event source {tag:?}"))),
                    },
                    _ => return Err(invalid("too many arguments to down".to_string())),
                };
                ScriptCommand::Down(pos, source)
            }
            ["move", x, y] => {
                ScriptCommand::Move((number(x).map_err(invalid)?, number(y).map_err(invalid)?))
            }
            ["up"] => ScriptCommand::Up,
            _ => return Err(invalid(format!("unrecognized command {text:?}"))),
        };
        commands.push(command);
    }

    Ok(commands)
}

fn number(word: &str) -> Result<f32, String> {
    word.parse::<f32>()
        .map_err(|e| format!("invalid number {word:?}: {e}"))
}

/// 回放脚本，每条命令输出一行 `x y width height state`
pub fn run(controller: &mut FrameController, commands: &[ScriptCommand]) -> Vec<String> {
    commands
        .iter()
        .map(|command| {
            match command {
                ScriptCommand::Container(w, h) => controller.set_container(*w, *h),
                ScriptCommand::Down(pos, source) => {
                    controller.on_pointer_down(*pos, source.clone());
                }
                ScriptCommand::Move(pos) => {
                    controller.on_pointer_move(*pos);
                }
                ScriptCommand::Up => {
                    controller.on_pointer_up();
                }
            }
            let rect = controller.rect();
            format!(
                "{} {} {} {} {}",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                controller.state()
            )
        })
        .collect()
}
