use crate::config::{load_targets_file, Config};
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artist-select")]
#[command(about = "画家リストに一致する画像フォルダを選別してコピー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時: ~/.config/artist-select/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログ照合からフォルダコピーまで実行
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// コピーせずに照合結果のみ表示
        #[arg(long)]
        dry_run: bool,

        /// 実行結果をJSONで保存
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 対象画家リストを表示
    Targets {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,
    },
}

/// 設定ファイルの値を上書きするオプション
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// 画家カタログCSV
    #[arg(long)]
    pub catalogue: Option<PathBuf>,

    /// 画家別フォルダを含む画像フォルダ
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// 出力フォルダ
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 対象画家（複数指定可）
    #[arg(short, long = "artist")]
    pub artists: Vec<String>,

    /// 対象画家リストファイル（1行1名）
    #[arg(short, long)]
    pub targets_file: Option<PathBuf>,
}

impl Overrides {
    /// 設定に上書きを適用
    ///
    /// `--artist` か `--targets-file` が指定された場合、対象リストは置き換わる
    /// （`--artist` の後にファイルの内容が続く）。
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(path) = &self.catalogue {
            config.catalogue_path = path.clone();
        }
        if let Some(path) = &self.source {
            config.source_dir = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_dir = path.clone();
        }

        if !self.artists.is_empty() || self.targets_file.is_some() {
            let mut targets = self.artists.clone();
            if let Some(path) = &self.targets_file {
                targets.extend(load_targets_file(path)?);
            }
            config.targets = targets;
        }

        Ok(())
    }
}
