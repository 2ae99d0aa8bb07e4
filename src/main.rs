//! # Photomosaic - 照片马赛克工具箱
//!
//! 将分散的照片处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - (无子命令) / `convert` - 批量转换 tiles/ 下的 .heic 为 .jpg，原文件移入回收站
//! - `mosaic` - 用素材图块拼出照片马赛克
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── mosaic/     (马赛克核心算法)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod mosaic;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 不带子命令时等价于 convert
    let command = cli.command.unwrap_or(Commands::Convert);

    if let Err(e) = commands::run(command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
