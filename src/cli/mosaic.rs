//! # mosaic 子命令 CLI 定义
//!
//! 用素材图块拼出照片马赛克
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/mosaic.rs`

use clap::Args;
use std::path::PathBuf;

/// mosaic 子命令参数
#[derive(Args, Debug)]
pub struct MosaicArgs {
    /// The image to turn into a mosaic
    pub image: PathBuf,

    /// Directory containing the tile images
    #[arg(short, long, default_value = "tiles")]
    pub tiles: PathBuf,

    /// Side length the input image is resized to (in tiles)
    #[arg(short, long, default_value_t = 128)]
    pub size: u32,

    /// Output path for the assembled mosaic
    #[arg(short, long, default_value = "mosaic.png")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
