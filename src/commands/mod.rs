//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `mosaic/`, `utils/`
//! - 子模块: convert, mosaic

pub mod convert;
pub mod mosaic;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert => convert::execute(),
        Commands::Mosaic(args) => mosaic::execute(args),
    }
}
