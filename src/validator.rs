//! 入力パスの事前検証
//!
//! 出力フォルダに触れる前に実行する。

use crate::error::{Result, SelectError};
use std::path::Path;

/// カタログがファイル、画像フォルダがディレクトリであることを確認
pub fn check_paths(catalogue_path: &Path, source_dir: &Path) -> Result<()> {
    if !catalogue_path.is_file() {
        return Err(SelectError::CatalogueNotFound(catalogue_path.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(SelectError::SourceDirNotFound(source_dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_paths() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("artists.csv");
        std::fs::write(&csv, "name\n").unwrap();

        assert!(check_paths(&csv, dir.path()).is_ok());
    }

    #[test]
    fn test_catalogue_missing() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("missing.csv");

        let err = check_paths(&csv, dir.path()).unwrap_err();
        assert!(matches!(err, SelectError::CatalogueNotFound(ref p) if p == &csv));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_catalogue_is_directory() {
        let dir = tempdir().unwrap();
        let err = check_paths(dir.path(), dir.path()).unwrap_err();
        assert!(matches!(err, SelectError::CatalogueNotFound(_)));
    }

    #[test]
    fn test_source_is_file() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("artists.csv");
        std::fs::write(&csv, "name\n").unwrap();

        let err = check_paths(&csv, &csv).unwrap_err();
        assert!(matches!(err, SelectError::SourceDirNotFound(_)));
    }
}
