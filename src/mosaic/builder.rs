//! # 素材装载与拼装
//!
//! 从目录装载素材图块，并把目标图像的每个像素替换为最接近的图块。
//!
//! ## 功能
//! - 装载目录下所有可读图像并缩放为 TILE_SIDE x TILE_SIDE
//! - 不可读文件直接跳过
//! - 按唯一颜色并行匹配图块，再逐格拼装
//!
//! ## 依赖关系
//! - 被 `commands/mosaic.rs` 调用
//! - 使用 `mosaic/palette.rs`
//! - 使用 `image`, `rayon`, `walkdir` crate
//! - 使用 `utils/progress.rs`

use crate::error::{MosaicError, Result};
use crate::mosaic::palette::{nearest_tile, Tile};
use crate::mosaic::TILE_SIDE;
use crate::utils::progress;

use image::{DynamicImage, GenericImage, GenericImageView, Rgba};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 装载素材目录，返回图块列表和被跳过的文件数
pub fn load_tiles(dir: &Path) -> Result<(Vec<Tile>, usize)> {
    if !dir.is_dir() {
        return Err(MosaicError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let candidates: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    if candidates.is_empty() {
        return Err(MosaicError::NoFilesFound {
            pattern: format!("{}/*", dir.display()),
        });
    }

    let pb = progress::create_progress_bar(candidates.len() as u64, "Loading tiles");

    let tiles: Vec<Tile> = candidates
        .par_iter()
        .filter_map(|path| {
            let tile = image::open(path)
                .ok()
                .map(|img| Tile::new(img.thumbnail_exact(TILE_SIDE, TILE_SIDE)));
            pb.inc(1);
            tile
        })
        .collect();

    pb.finish_and_clear();

    if tiles.is_empty() {
        return Err(MosaicError::NoFilesFound {
            pattern: format!("{}/*", dir.display()),
        });
    }

    let skipped = candidates.len() - tiles.len();
    Ok((tiles, skipped))
}

/// 把缩小后的目标图像拼装成马赛克大图
pub fn build_mosaic(image: &DynamicImage, tiles: &[Tile]) -> Result<DynamicImage> {
    if tiles.is_empty() {
        return Err(MosaicError::Other("tile set is empty".to_string()));
    }

    // 相同颜色的像素共享同一个图块，只为唯一颜色做一次匹配
    let colors: Vec<Rgba<u8>> = image
        .pixels()
        .map(|(_x, _y, pixel)| pixel)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let pb = progress::create_progress_bar(colors.len() as u64, "Matching tiles");

    let mapping: HashMap<Rgba<u8>, &Tile> = colors
        .par_iter()
        .filter_map(|&color| {
            let tile = nearest_tile(color, tiles);
            pb.inc(1);
            tile.map(|t| (color, t))
        })
        .collect();

    pb.finish_and_clear();

    let mut mosaic =
        DynamicImage::new_rgba8(image.width() * TILE_SIDE, image.height() * TILE_SIDE);

    for (x, y, pixel) in image.pixels() {
        let tile = mapping
            .get(&pixel)
            .ok_or_else(|| MosaicError::Other(format!("no tile matched pixel at {},{}", x, y)))?;
        mosaic.copy_from(&tile.image, x * TILE_SIDE, y * TILE_SIDE)?;
    }

    Ok(mosaic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use std::fs;
    use tempfile::tempdir;

    fn solid_tile(color: Rgba<u8>) -> Tile {
        Tile::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            TILE_SIDE, TILE_SIDE, color,
        )))
    }

    #[test]
    fn test_load_tiles_missing_directory() {
        let err = load_tiles(Path::new("no-such-tile-dir")).unwrap_err();
        assert!(matches!(err, MosaicError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_load_tiles_empty_directory() {
        let dir = tempdir().unwrap();
        let err = load_tiles(dir.path()).unwrap_err();
        assert!(matches!(err, MosaicError::NoFilesFound { .. }));
    }

    #[test]
    fn test_load_tiles_skips_unreadable_files() {
        let dir = tempdir().unwrap();
        RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]))
            .save(dir.path().join("red.png"))
            .unwrap();
        fs::write(dir.path().join("junk.bin"), b"not an image").unwrap();

        let (tiles, skipped) = load_tiles(dir.path()).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(tiles[0].image.dimensions(), (TILE_SIDE, TILE_SIDE));
    }

    #[test]
    fn test_build_mosaic_dimensions_and_placement() {
        let tiles = vec![
            solid_tile(Rgba([255, 0, 0, 255])),
            solid_tile(Rgba([0, 0, 255, 255])),
        ];

        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([250, 5, 5, 255]));
        source.put_pixel(1, 0, Rgba([5, 5, 250, 255]));
        let source = DynamicImage::ImageRgba8(source);

        let mosaic = build_mosaic(&source, &tiles).unwrap();
        assert_eq!(mosaic.dimensions(), (2 * TILE_SIDE, TILE_SIDE));
        assert_eq!(mosaic.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(mosaic.get_pixel(TILE_SIDE, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_build_mosaic_with_no_tiles_fails() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(1, 1));
        assert!(build_mosaic(&source, &[]).is_err());
    }
}
