//! 画像フォルダの索引
//!
//! 直下のサブフォルダ名を NFC 正規化したキーで引けるようにする。

use crate::error::{Result, SelectError};
use artist_select_common::nfc;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// 正規化名 → ディスク上の元のフォルダ名
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    entries: HashMap<String, String>,
}

impl DirectoryIndex {
    /// フォルダ名を登録
    ///
    /// 正規化後のキーが衝突した場合は後から登録した名前が残る。
    /// 置き換えられた元の名前を返す。
    pub fn insert(&mut self, original: &str) -> Option<String> {
        self.entries.insert(nfc(original), original.to_string())
    }

    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 画像フォルダ直下のサブフォルダを索引化
///
/// ファイルは無視する。シンボリックリンクはリンク先がフォルダなら対象。
/// 一覧はファイル名順に処理するため、キー衝突時の勝者は名前順で最後のもの。
pub fn index_folders(source_dir: &Path) -> Result<DirectoryIndex> {
    let mut index = DirectoryIndex::default();

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1) // 直下のみ
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SelectError::DirectoryListing {
            path: source_dir.to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %path.display(), "skipping folder with non UTF-8 name");
            continue;
        };

        tracing::debug!(folder = name, "indexed");
        if let Some(previous) = index.insert(name) {
            tracing::warn!(
                replaced = %previous,
                kept = name,
                "folders normalize to the same name, keeping the later one"
            );
        }
    }

    Ok(index)
}
