//! Artist Select Common Library
//!
//! カタログ読み込み・名前正規化・対象解決など、ファイル操作を伴わない処理

pub mod catalogue;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use catalogue::{Catalogue, CatalogueRow};
pub use error::{Error, Result};
pub use normalize::{expected_folder_name, nfc};
pub use resolver::{resolve_targets, Resolution};
pub use types::{MatchOutcome, RunSummary};
