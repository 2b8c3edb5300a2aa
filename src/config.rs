use crate::error::{Result, SelectError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の対象画家
const DEFAULT_TARGETS: &[&str] = &[
    "Vasiliy Kandinskiy",
    "Claude Monet",
    "Salvador Dali",
    "Vincent van Gogh",
    "Gustav Klimt",
    "Hieronymus Bosch",
    "Pablo Picasso",
    "Henri Matisse",
    "Edvard Munch",
    "Georges Seurat",
    "Piet Mondrian",
    "Jackson Pollock",
    "Frida Kahlo",
    "William Turner",
    "Albrecht Dürer",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 画家カタログ（CSV）
    pub catalogue_path: PathBuf,
    /// 画家別サブフォルダを含む画像フォルダ
    pub source_dir: PathBuf,
    /// コピー先
    pub output_dir: PathBuf,
    /// 対象画家名（この順で照合・表示）
    pub targets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// 設定を読み込み
    ///
    /// 明示指定のファイルは必須。未指定なら既定パスにあれば読み込み、なければ既定値。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(SelectError::Config(format!(
                    "設定ファイルが見つかりません: {}",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default_config()),
            },
        };

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SelectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artist-select").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            catalogue_path: PathBuf::from("data/artists.csv"),
            source_dir: PathBuf::from("data/images"),
            output_dir: PathBuf::from("data/selected_styles"),
            targets: DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 実行用の設定に変換（対象が空ならエラー）
    pub fn into_run_config(self, dry_run: bool) -> Result<RunConfig> {
        if self.targets.is_empty() {
            return Err(SelectError::Config("対象画家が指定されていません".into()));
        }

        Ok(RunConfig {
            catalogue_path: self.catalogue_path,
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            targets: self.targets,
            dry_run,
        })
    }
}

/// パイプラインに渡す実行設定
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub catalogue_path: PathBuf,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub targets: Vec<String>,
    /// コピーせずに照合結果のみ表示
    pub dry_run: bool,
}

/// 対象画家リストファイルを読み込み（1行1名、空行と#コメントは無視）
pub fn load_targets_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SelectError::Config(format!("対象リストを読み込めません '{}': {}", path.display(), e))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
