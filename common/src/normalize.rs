//! 名前正規化モジュール
//!
//! カタログの画家名とディスク上のフォルダ名を、Unicode NFC 形式に揃えて比較する。
//! 合成済み文字 (U+00FC) と分解済み文字 (u + U+0308) は同じキーになる。

use unicode_normalization::UnicodeNormalization;

/// NFC（正準合成）形式に正規化
pub fn nfc(name: &str) -> String {
    name.nfc().collect()
}

/// カタログの画家名から期待されるフォルダ名を生成
///
/// NFC 正規化の後、半角スペースをすべてアンダースコアに置換する。
/// それ以外の文字は変換しない。
pub fn expected_folder_name(name: &str) -> String {
    nfc(name).replace(' ', "_")
}
