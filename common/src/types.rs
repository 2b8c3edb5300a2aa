//! 処理結果の型定義
//!
//! - MatchOutcome: 画家ごとの処理結果
//! - RunSummary: 1回の実行全体の集計

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 画家ごとの処理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MatchOutcome {
    /// コピー成功（dry-run時はコピー予定）
    #[serde(rename_all = "camelCase")]
    Copied {
        artist: String,
        folder: String,
        files: usize,
    },
    /// 対象リストにあるがカタログにない
    NotInCatalogue { artist: String },
    /// カタログにあるが対応フォルダがディスク上にない
    #[serde(rename_all = "camelCase")]
    NotFoundOnDisk {
        artist: String,
        expected_folder: String,
    },
    /// コピー中のエラー
    CopyError {
        artist: String,
        folder: String,
        detail: String,
    },
}

impl MatchOutcome {
    pub fn artist(&self) -> &str {
        match self {
            MatchOutcome::Copied { artist, .. }
            | MatchOutcome::NotInCatalogue { artist }
            | MatchOutcome::NotFoundOnDisk { artist, .. }
            | MatchOutcome::CopyError { artist, .. } => artist,
        }
    }

    /// フォルダ処理がスキップされたか（未検出・コピーエラー）
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            MatchOutcome::NotFoundOnDisk { .. } | MatchOutcome::CopyError { .. }
        )
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Copied { artist, folder, files } => {
                write!(f, "'{}' → '{}' ({}ファイル)", artist, folder, files)
            }
            MatchOutcome::NotInCatalogue { artist } => {
                write!(f, "'{}' はカタログに存在しません", artist)
            }
            MatchOutcome::NotFoundOnDisk { artist, expected_folder } => {
                write!(f, "'{}' のフォルダ '{}' が見つかりません", artist, expected_folder)
            }
            MatchOutcome::CopyError { artist, folder, detail } => {
                write!(f, "'{}' ('{}') のコピーに失敗: {}", artist, folder, detail)
            }
        }
    }
}

/// 実行結果の集計
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// 対象リストの件数
    pub requested: usize,
    /// 処理順の結果（カタログ未登録 → フォルダ処理の順）
    pub outcomes: Vec<MatchOutcome>,
    /// 出力先（絶対パス）
    pub output_dir: PathBuf,
    #[serde(default)]
    pub dry_run: bool,
}

impl RunSummary {
    /// カタログで一致した件数
    pub fn matched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o, MatchOutcome::NotInCatalogue { .. }))
            .count()
    }

    /// カタログに存在しなかった対象名
    pub fn missing_from_catalogue(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MatchOutcome::NotInCatalogue { .. }))
            .map(MatchOutcome::artist)
            .collect()
    }

    pub fn copied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MatchOutcome::Copied { .. }))
            .count()
    }

    /// スキップ件数（未検出 + コピーエラー）
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunSummary {
        RunSummary {
            requested: 4,
            outcomes: vec![
                MatchOutcome::NotInCatalogue { artist: "Nonexistent Artist".into() },
                MatchOutcome::Copied {
                    artist: "Claude Monet".into(),
                    folder: "Claude_Monet".into(),
                    files: 3,
                },
                MatchOutcome::NotFoundOnDisk {
                    artist: "Frida Kahlo".into(),
                    expected_folder: "Frida_Kahlo".into(),
                },
                MatchOutcome::CopyError {
                    artist: "Edvard Munch".into(),
                    folder: "Edvard_Munch".into(),
                    detail: "permission denied".into(),
                },
            ],
            output_dir: PathBuf::from("/tmp/out"),
            dry_run: false,
        }
    }

    #[test]
    fn test_counts() {
        let summary = sample();
        assert_eq!(summary.matched(), 3);
        assert_eq!(summary.copied(), 1);
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.missing_from_catalogue(), vec!["Nonexistent Artist"]);
    }

    #[test]
    fn test_json_tags() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"status\": \"notFoundOnDisk\""));
        assert!(json.contains("\"expectedFolder\": \"Frida_Kahlo\""));
        assert!(json.contains("\"outputDir\""));

        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.outcomes, sample().outcomes);
    }

    #[test]
    fn test_display_names_artist() {
        for outcome in sample().outcomes {
            let display = outcome.to_string();
            assert!(display.contains(outcome.artist()), "{}", display);
        }
    }
}
