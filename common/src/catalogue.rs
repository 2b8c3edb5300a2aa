//! 画家カタログモジュール
//!
//! `name` 列を持つ UTF-8 の CSV を読み込み、画家名（前後の空白を除去）と
//! その他の列をまとめて保持する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// 画家名の列名
pub const NAME_COLUMN: &str = "name";

/// CSVの1行を表す構造体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueRow {
    /// 画家名（trim済み）
    pub name: String,
    /// name以外の列（列名 → 値）
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// カタログ全体
///
/// 同名の行は重複したまま保持する（一意性は検査しない）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    rows: Vec<CatalogueRow>,
}

impl Catalogue {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    /// 任意のリーダーから読み込み
    ///
    /// 不正なUTF-8・CSV構造エラー・`name` 列の欠落はすべてエラーになる。
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let name_idx = headers
            .iter()
            .position(|h| h == NAME_COLUMN)
            .ok_or_else(|| Error::MissingColumn(NAME_COLUMN.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;

            let name = record.get(name_idx).unwrap_or_default().trim().to_string();
            let fields = headers
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != name_idx)
                .map(|(i, h)| (h.to_string(), record.get(i).unwrap_or_default().to_string()))
                .collect();

            rows.push(CatalogueRow { name, fields });
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CatalogueRow] {
        &self.rows
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<CatalogueRow>> for Catalogue {
    fn from(rows: Vec<CatalogueRow>) -> Self {
        Self { rows }
    }
}
