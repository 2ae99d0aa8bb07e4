//! # 色彩匹配
//!
//! 计算素材图块的平均颜色，并为目标像素挑选色彩最接近的图块。
//!
//! ## 依赖关系
//! - 被 `mosaic/builder.rs` 使用
//! - 使用 `image`, `rayon` crate

use image::{DynamicImage, GenericImageView, Pixel, Rgba};
use rayon::prelude::*;

/// 一个素材图块：缩放后的图像及其预先算好的平均颜色
#[derive(Debug)]
pub struct Tile {
    pub image: DynamicImage,
    pub average: Rgba<u8>,
}

impl Tile {
    /// 从缩放后的图像创建图块，平均颜色只算一次
    pub fn new(image: DynamicImage) -> Self {
        let average = average_color(&image);
        Self { image, average }
    }
}

/// 计算图像所有像素（含 alpha）的平均颜色
pub fn average_color(image: &DynamicImage) -> Rgba<u8> {
    let pixel_count = image.width() as f64 * image.height() as f64;

    let (mut r, mut g, mut b, mut a) = (0., 0., 0., 0.);
    for (_x, _y, Rgba([pr, pg, pb, pa])) in image.pixels() {
        r += pr as f64;
        g += pg as f64;
        b += pb as f64;
        a += pa as f64;
    }

    Rgba([
        (r / pixel_count) as u8,
        (g / pixel_count) as u8,
        (b / pixel_count) as u8,
        (a / pixel_count) as u8,
    ])
}

/// 两个像素在 RGBA 空间的欧氏距离
pub fn color_distance(pixel1: Rgba<u8>, pixel2: Rgba<u8>) -> f64 {
    pixel1
        .map2(&pixel2, |l, r| if l < r { r - l } else { l - r })
        .channels()
        .iter()
        .map(|&n| (n as f64).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// 在素材集中挑选平均颜色最接近给定像素的图块
pub fn nearest_tile(pixel: Rgba<u8>, tiles: &[Tile]) -> Option<&Tile> {
    tiles.par_iter().min_by(|a, b| {
        color_distance(a.average, pixel).total_cmp(&color_distance(b.average, pixel))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn solid(color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, color))
    }

    #[test]
    fn test_average_color_of_solid_image() {
        let img = solid(Rgba([10, 20, 30, 255]));
        assert_eq!(average_color(&img), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_color_distance_zero_and_symmetric() {
        let a = Rgba([1, 2, 3, 4]);
        let b = Rgba([200, 100, 50, 255]);
        assert_eq!(color_distance(a, a), 0.0);
        assert_eq!(color_distance(a, b), color_distance(b, a));
    }

    #[test]
    fn test_color_distance_known_value() {
        let a = Rgba([0, 0, 0, 0]);
        let b = Rgba([3, 4, 0, 0]);
        assert_eq!(color_distance(a, b), 5.0);
    }

    #[test]
    fn test_nearest_tile_picks_closest_average() {
        let tiles = vec![
            Tile::new(solid(Rgba([255, 0, 0, 255]))),
            Tile::new(solid(Rgba([0, 0, 255, 255]))),
        ];

        let picked = nearest_tile(Rgba([250, 10, 10, 255]), &tiles).unwrap();
        assert_eq!(picked.average, Rgba([255, 0, 0, 255]));

        let picked = nearest_tile(Rgba([0, 0, 200, 255]), &tiles).unwrap();
        assert_eq!(picked.average, Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_nearest_tile_empty_set() {
        assert!(nearest_tile(Rgba([0, 0, 0, 0]), &[]).is_none());
    }
}
