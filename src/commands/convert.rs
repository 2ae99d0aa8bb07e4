//! # convert 命令实现
//!
//! 批量把 `tiles/` 目录下的 .heic 转换为 .jpg。
//!
//! ## 功能
//! - 收集 tiles/ 下的 .heic 文件（不递归）
//! - 逐个调用外部 `magick` 命令转换
//! - 转换后原文件移入系统回收站（可恢复）
//! - 进度条显示当前文件
//!
//! 严格串行处理，任何一步失败立即中止整个运行：
//! 不做单文件隔离，不重试，也不回滚已完成的文件。
//!
//! ## 依赖关系
//! - 使用 `utils/output.rs`, `utils/progress.rs`
//! - 使用 `trash` crate 移动文件到回收站

use crate::error::{MosaicError, Result};
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// 素材目录（相对路径，固定）
const TILES_DIR: &str = "tiles";
/// 源文件匹配模式
const SOURCE_PATTERN: &str = "*.heic";
/// 目标扩展名
const TARGET_EXT: &str = "jpg";
/// 外部转换命令
const CONVERTER: &str = "magick";

/// 执行 convert 命令
pub fn execute() -> Result<()> {
    output::print_header("Converting HEIC tiles to JPEG");

    let tiles_dir = Path::new(TILES_DIR);
    if !tiles_dir.is_dir() {
        return Err(MosaicError::DirectoryNotFound {
            path: tiles_dir.display().to_string(),
        });
    }

    let files = collect_source_files(tiles_dir, SOURCE_PATTERN)?;

    if files.is_empty() {
        output::print_info(&format!(
            "No files matched '{}' under {}",
            SOURCE_PATTERN,
            tiles_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to convert", files.len()));

    let pb = progress::create_progress_bar(files.len() as u64, "Converting");

    for file in &files {
        pb.set_message(format!("Converting {}", file.display()));

        let target = file.with_extension(TARGET_EXT);
        run_converter(file, &target)?;
        move_to_trash(file)?;

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    output::print_done(&format!(
        "Converted {} file(s) to .{} in '{}'",
        files.len(),
        TARGET_EXT,
        tiles_dir.display()
    ));

    Ok(())
}

/// 收集输入文件（不递归，按文件名排序保证顺序确定）
fn collect_source_files(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob_pattern = glob::Pattern::new(pattern)
        .map_err(|e| MosaicError::Other(format!("Invalid pattern '{}': {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir).max_depth(1) {
        // 枚举失败（如目录不可读）在任何转换开始前直接中止
        let entry = entry.map_err(|e| MosaicError::DirectoryUnreadable {
            path: input_dir.display().to_string(),
            source: e,
        })?;
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 调用外部转换命令，阻塞等待退出
fn run_converter(source: &Path, target: &Path) -> Result<()> {
    run_command(CONVERTER, source, target)
}

/// 原文件进回收站，用户可从系统回收站找回
fn move_to_trash(path: &Path) -> Result<()> {
    trash::delete(path).map_err(|e| MosaicError::TrashError {
        path: path.display().to_string(),
        source: e,
    })
}

fn run_command(converter: &str, source: &Path, target: &Path) -> Result<()> {
    let result = Command::new(converter).arg(source).arg(target).output();

    match result {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(MosaicError::CommandFailed {
            command: format!("{} {}", converter, source.display()),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }),
        Err(_) => Err(MosaicError::CommandNotFound {
            command: converter.to_string(),
        }),
    }
}
