//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量 .heic -> .jpg 转换（默认命令，无参数）
//! - `mosaic`: 照片马赛克生成
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: mosaic

pub mod mosaic;

use clap::{Parser, Subcommand};

/// Photomosaic - 照片马赛克工具箱
#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A photo mosaic toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert tiles/*.heic to .jpg with 'magick', trashing the originals
    Convert,

    /// Build a photo mosaic from an image and a tile directory
    Mosaic(mosaic::MosaicArgs),
}
