//! # 马赛克核心模块
//!
//! 照片马赛克的核心算法：素材色彩统计与图块拼装。
//!
//! ## 依赖关系
//! - 被 `commands/mosaic.rs` 调用
//! - 使用 `image`, `rayon` crate
//! - 子模块: palette, builder

pub mod builder;
pub mod palette;

/// 马赛克中每个方形图块的边长（像素）
pub const TILE_SIDE: u32 = 26;
