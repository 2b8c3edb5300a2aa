use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログファイルが見つかりません: {}", .0.display())]
    CatalogueNotFound(PathBuf),

    #[error("画像フォルダが見つかりません: {}", .0.display())]
    SourceDirNotFound(PathBuf),

    #[error("カタログ読み込みエラー '{}': {source}", path.display())]
    CatalogueLoad {
        path: PathBuf,
        #[source]
        source: artist_select_common::Error,
    },

    #[error("対象画家がカタログに1件も見つかりません")]
    NoArtistsMatched,

    #[error("フォルダ一覧の取得に失敗 '{}': {source}", path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("出力フォルダを作成できません '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("コピーエラー '{}': {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] artist_select_common::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;
