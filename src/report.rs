//! 実行結果の表示・保存

use crate::error::Result;
use artist_select_common::{MatchOutcome, RunSummary};
use std::path::Path;

/// 最終集計を表示
pub fn print_summary(summary: &RunSummary) {
    println!("--------------------");
    println!("{}", if summary.dry_run { "完了 (dry-run: コピーは行っていません)" } else { "完了" });
    println!(
        "カタログで一致: {}/{}件",
        summary.matched(),
        summary.requested
    );

    let missing = summary.missing_from_catalogue();
    if !missing.is_empty() {
        println!("カタログ未登録: {}", missing.join(", "));
    }

    println!(
        "{}: {}件",
        if summary.dry_run { "コピー予定" } else { "コピー成功" },
        summary.copied()
    );
    println!("スキップ: {}件 (フォルダ未検出またはコピーエラー)", summary.skipped());

    // スキップ理由は画家ごとに列挙
    for outcome in summary.outcomes.iter().filter(|o| o.is_skipped()) {
        match outcome {
            MatchOutcome::NotFoundOnDisk { .. } => println!("  - 未検出: {}", outcome),
            _ => println!("  - エラー: {}", outcome),
        }
    }

    println!("出力先: {}", summary.output_dir.display());
    println!("--------------------");
}

/// 実行結果をJSONで保存
pub fn save_json(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, summary.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");
        let summary = RunSummary {
            requested: 1,
            outcomes: vec![MatchOutcome::Copied {
                artist: "Claude Monet".into(),
                folder: "Claude_Monet".into(),
                files: 3,
            }],
            output_dir: dir.path().to_path_buf(),
            dry_run: false,
        };

        save_json(&summary, &path).unwrap();
        let loaded: RunSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.copied(), 1);
    }
}
