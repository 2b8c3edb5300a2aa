//! 選別処理の本体
//!
//! 1. 入力パス確認 → 2. カタログ読み込み → 3. 対象照合
//! → 4. フォルダ索引 → 5. 照合・コピー の順に一方向で進む。
//! 致命的なエラーは即座に返し、画家単位の失敗は結果に記録して続行する。

use crate::config::RunConfig;
use crate::copier;
use crate::error::{Result, SelectError};
use crate::scanner::{self, DirectoryIndex};
use crate::validator;
use artist_select_common::{
    expected_folder_name, resolve_targets, Catalogue, CatalogueRow, MatchOutcome, RunSummary,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    // 1. 入力パス確認（出力フォルダ作成より先）
    println!("[1/5] 入力パスを確認中...");
    validator::check_paths(&config.catalogue_path, &config.source_dir)?;
    println!("✔ 入力パスOK");

    if !config.dry_run {
        std::fs::create_dir_all(&config.output_dir).map_err(|e| SelectError::OutputDir {
            path: config.output_dir.clone(),
            source: e,
        })?;
    }
    let output_dir = absolute_path(&config.output_dir);
    println!("  出力先: {}\n", output_dir.display());

    // 2. カタログ読み込み
    println!("[2/5] カタログを読み込み中...");
    let catalogue =
        Catalogue::from_csv(&config.catalogue_path).map_err(|e| SelectError::CatalogueLoad {
            path: config.catalogue_path.clone(),
            source: e,
        })?;
    println!("✔ {}件の画家を読み込み (UTF-8)\n", catalogue.len());

    // 3. 対象照合
    println!("[3/5] 対象画家をカタログと照合中...");
    let resolution = resolve_targets(&config.targets, &catalogue);
    println!(
        "✔ {}/{}件の対象画家がカタログに存在",
        resolution.matched.len(),
        config.targets.len()
    );
    if !resolution.missing.is_empty() {
        println!("⚠ カタログに見つからない対象画家:");
        for name in &resolution.missing {
            println!("  - '{}' (綴りを確認してください)", name);
        }
    }
    println!();

    if resolution.is_empty() {
        return Err(SelectError::NoArtistsMatched);
    }

    // 4. フォルダ索引
    println!("[4/5] '{}' のフォルダを走査中...", config.source_dir.display());
    let index = scanner::index_folders(&config.source_dir)?;
    println!("✔ {}個のフォルダを検出\n", index.len());

    // 5. 照合・コピー
    println!(
        "[5/5] フォルダを{}中...",
        if config.dry_run { "照合（dry-run）" } else { "コピー" }
    );
    let mut outcomes: Vec<MatchOutcome> = resolution
        .missing
        .into_iter()
        .map(|artist| MatchOutcome::NotInCatalogue { artist })
        .collect();

    let pb = ProgressBar::new(resolution.matched.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for row in &resolution.matched {
        pb.set_message(row.name.clone());
        let outcome = process_artist(row, &index, config);
        let line = match &outcome {
            MatchOutcome::Copied { folder, files, .. } if config.dry_run => {
                format!("  ✔ '{}' → '{}' ({}ファイルをコピー予定)", row.name, folder, files)
            }
            MatchOutcome::Copied { .. } => format!("  ✔ {}", outcome),
            _ => format!("  ⚠ {}", outcome),
        };
        // バー非表示（非TTY）でも必ず stdout に出す
        pb.suspend(|| println!("{}", line));
        outcomes.push(outcome);
        pb.inc(1);
    }
    pb.finish_and_clear();
    println!();

    Ok(RunSummary {
        requested: config.targets.len(),
        outcomes,
        output_dir,
        dry_run: config.dry_run,
    })
}

/// 1人分の照合とコピー
///
/// 失敗は結果として返し、呼び出し側の処理は止めない。
pub fn process_artist(row: &CatalogueRow, index: &DirectoryIndex, config: &RunConfig) -> MatchOutcome {
    let expected = expected_folder_name(&row.name);

    let Some(folder) = index.get(&expected) else {
        return MatchOutcome::NotFoundOnDisk {
            artist: row.name.clone(),
            expected_folder: expected,
        };
    };

    let source = config.source_dir.join(folder);
    if config.dry_run {
        return MatchOutcome::Copied {
            artist: row.name.clone(),
            folder: folder.to_string(),
            files: copier::count_files(&source),
        };
    }

    let destination = config.output_dir.join(folder);
    match copier::copy_tree(&source, &destination) {
        Ok(files) => MatchOutcome::Copied {
            artist: row.name.clone(),
            folder: folder.to_string(),
            files,
        },
        Err(e) => {
            tracing::warn!(artist = %row.name, error = %e, "copy failed");
            MatchOutcome::CopyError {
                artist: row.name.clone(),
                folder: folder.to_string(),
                detail: e.to_string(),
            }
        }
    }
}

fn absolute_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
