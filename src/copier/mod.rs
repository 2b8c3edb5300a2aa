//! フォルダの再帰コピー
//!
//! 既存のコピー先にマージする。既存ファイルは上書きし、無関係なファイルは残す。
//! エラー時のロールバックは行わない（途中までのコピーはそのまま）。

use crate::error::{Result, SelectError};
use std::path::Path;
use walkdir::WalkDir;

/// `source` 以下を `destination` に再帰コピーし、コピーしたファイル数を返す
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    std::fs::create_dir_all(destination).map_err(|e| SelectError::Copy {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut files = 0;

    for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| SelectError::Copy {
            path: e.path().unwrap_or(source).to_path_buf(),
            source: e.into(),
        })?;

        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| SelectError::Copy {
                path: target.clone(),
                source: e,
            })?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| SelectError::Copy {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            tracing::debug!(file = %target.display(), "copied");
            files += 1;
        }
    }

    Ok(files)
}

/// フォルダ以下のファイル数（再帰）
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry while counting files");
                None
            }
        })
        .filter(|e| !e.file_type().is_dir())
        .count()
}
