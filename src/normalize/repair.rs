//! Variable reference repair
//!
//! Rewrites loose references (`$name$`, `$ name $`, bare `$ name`) into the
//! canonical `$ name []$` form by plain substring replacement.

use crate::vocabulary::{canonical_reference, VariableVocabulary};

/// Repair every variable reference in one field
///
/// Names are visited longest first. The bare `$ name` rule only fires when
/// the whole field contains no `]$` at all.
pub fn fix_var(text: &str, vocabulary: &VariableVocabulary) -> String {
    let mut text = text.to_string();

    for name in vocabulary.longest_first() {
        let canonical = canonical_reference(name);

        let tight = format!("${}$", name);
        if text.contains(&tight) {
            text = text.replace(&tight, &canonical);
        }

        let spaced = format!("$ {} $", name);
        if text.contains(&spaced) {
            text = text.replace(&spaced, &canonical);
        }

        let bare = format!("$ {}", name);
        if text.contains(&bare) && !text.contains("]$") {
            text = text.replace(&bare, &canonical);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> VariableVocabulary {
        VariableVocabulary::default()
    }

    #[test]
    fn test_tight_reference() {
        assert_eq!(fix_var("$权重$ * 2", &vocab()), "$ 权重 []$ * 2");
    }

    #[test]
    fn test_spaced_reference() {
        assert_eq!(fix_var("$ 权重 $ * 2", &vocab()), "$ 权重 []$ * 2");
    }

    #[test]
    fn test_bare_reference() {
        assert_eq!(fix_var("$ 最高分 - 1", &vocab()), "$ 最高分 []$ - 1");
    }

    #[test]
    fn test_canonical_is_unchanged() {
        let text = "$ 机构指标值 []$ / $ 机构计划值 []$ > 0.6";
        assert_eq!(fix_var(text, &vocab()), text);
    }

    #[test]
    fn test_whole_field_guard_suppresses_bare_rule() {
        // One well-formed reference anywhere blocks the bare rule for all names
        let text = "$ 权重 []$ - $ 最高分";
        assert_eq!(fix_var(text, &vocab()), text);
    }

    #[test]
    fn test_unknown_names_are_left_alone() {
        assert_eq!(fix_var("$未知变量$ + 1", &vocab()), "$未知变量$ + 1");
    }

    #[test]
    fn test_longer_name_is_not_corrupted_by_shorter() {
        let out = fix_var("$机构指标值(2位小数)$ > $机构指标值$", &vocab());
        assert_eq!(out, "$ 机构指标值(2位小数) []$ > $ 机构指标值 []$");
    }

    #[test]
    fn test_bare_longer_name_is_closed_after_full_name() {
        let out = fix_var("$ 机构指标值(2位小数) > 1", &vocab());
        assert_eq!(out, "$ 机构指标值(2位小数) []$ > 1");
    }
}
