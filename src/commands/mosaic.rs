//! # mosaic 命令实现
//!
//! 装载素材、缩小目标图像、逐像素匹配图块并保存成品。
//!
//! ## 依赖关系
//! - 使用 `cli/mosaic.rs` 定义的参数
//! - 使用 `mosaic/builder.rs`
//! - 使用 `utils/output.rs`

use crate::cli::mosaic::MosaicArgs;
use crate::error::Result;
use crate::mosaic::builder;
use crate::utils::output;

/// 执行 mosaic 命令
pub fn execute(args: MosaicArgs) -> Result<()> {
    output::print_header("Building photo mosaic");

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let (tiles, skipped) = builder::load_tiles(&args.tiles)?;
    if skipped > 0 {
        output::print_warning(&format!("Skipped {} unreadable file(s)", skipped));
    }
    output::print_info(&format!("Loaded {} tile(s)", tiles.len()));

    let image = image::open(&args.image)?.thumbnail_exact(args.size, args.size);

    let mosaic = builder::build_mosaic(&image, &tiles)?;
    mosaic.save(&args.output)?;

    output::print_conversion(
        &args.image.display().to_string(),
        &args.output.display().to_string(),
    );
    output::print_done(&format!(
        "Mosaic saved to '{}' ({}x{})",
        args.output.display(),
        mosaic.width(),
        mosaic.height()
    ));

    Ok(())
}
