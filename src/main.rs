use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use frame_rs::{script, FrameConfig, FrameController};
use tracing::Level;

/// 回放一段指针事件脚本，输出每一步之后的矩形
#[derive(Debug, Parser)]
#[command(name = "frame_rs", version)]
struct Args {
    /// TOML 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280.0)]
    container_width: f32,

    #[arg(long, default_value_t = 720.0)]
    container_height: f32,

    /// 输出调试日志（重复两次输出 trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 事件脚本，缺省时从标准输入读取
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;
            buf
        }
    };
    let commands = script::parse_script(&source)?;

    let mut controller =
        FrameController::new(&config, (args.container_width, args.container_height));
    for line in script::run(&mut controller, &commands) {
        println!("{line}");
    }

    Ok(())
}
