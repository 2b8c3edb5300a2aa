//! 対象画家の解決
//!
//! 対象リストとカタログを完全一致（大文字小文字・アクセントを区別）で照合する。

use crate::catalogue::{Catalogue, CatalogueRow};
use std::collections::HashSet;

/// 照合結果
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// カタログ上で一致した行（カタログの順序）
    pub matched: Vec<CatalogueRow>,
    /// カタログに存在しなかった対象名（対象リストの順序）
    pub missing: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// 対象リストをカタログと照合
///
/// 一致した行はカタログの並び順で返す。同名の重複行はすべて含まれる。
pub fn resolve_targets(targets: &[String], catalogue: &Catalogue) -> Resolution {
    let wanted: HashSet<&str> = targets.iter().map(String::as_str).collect();

    let matched: Vec<CatalogueRow> = catalogue
        .rows()
        .iter()
        .filter(|row| !row.name.is_empty() && wanted.contains(row.name.as_str()))
        .cloned()
        .collect();

    let found: HashSet<&str> = matched.iter().map(|row| row.name.as_str()).collect();
    let missing = targets
        .iter()
        .filter(|t| !found.contains(t.as_str()))
        .cloned()
        .collect();

    Resolution { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue(names: &[&str]) -> Catalogue {
        names
            .iter()
            .map(|n| CatalogueRow { name: n.to_string(), ..Default::default() })
            .collect::<Vec<_>>()
            .into()
    }

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing() {
        let cat = catalogue(&["Claude Monet", "Foo Bar"]);
        let res = resolve_targets(&targets(&["Claude Monet", "Nonexistent Artist"]), &cat);

        assert_eq!(res.matched.len(), 1);
        assert_eq!(res.matched[0].name, "Claude Monet");
        assert_eq!(res.missing, vec!["Nonexistent Artist".to_string()]);
    }

    #[test]
    fn test_order_follows_catalogue() {
        let cat = catalogue(&["Edvard Munch", "Claude Monet", "Gustav Klimt"]);
        let res = resolve_targets(&targets(&["Gustav Klimt", "Edvard Munch"]), &cat);

        let names: Vec<_> = res.matched.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Edvard Munch", "Gustav Klimt"]);
    }

    #[test]
    fn test_exact_match_only() {
        let cat = catalogue(&["Salvador Dali"]);
        let res = resolve_targets(&targets(&["salvador dali", "Salvador Dalí"]), &cat);

        assert!(res.is_empty());
        assert_eq!(res.missing.len(), 2);
    }

    #[test]
    fn test_empty_names_never_match() {
        let cat = catalogue(&["", "Frida Kahlo"]);
        let res = resolve_targets(&targets(&["", "Frida Kahlo"]), &cat);

        assert_eq!(res.matched.len(), 1);
        assert_eq!(res.missing, vec![String::new()]);
    }

    #[test]
    fn test_duplicate_rows_all_matched() {
        let cat = catalogue(&["Pablo Picasso", "Pablo Picasso"]);
        let res = resolve_targets(&targets(&["Pablo Picasso"]), &cat);
        assert_eq!(res.matched.len(), 2);
        assert!(res.missing.is_empty());
    }
}
