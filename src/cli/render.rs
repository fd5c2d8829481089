//! Text rendering for CLI output

use crate::history::{HistoryLog, HistoryRecord};
use crate::rule::RuleSet;
use crate::translator::REPHRASE_HINT;
use crate::vocabulary::{canonical_reference, VariableVocabulary};
use std::fmt::Write;

/// Human-readable translation result
pub fn render_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    match rules {
        RuleSet::Single(rule) => {
            let _ = writeln!(out, "✅ 生成成功");
            let _ = writeln!(out);
            let _ = writeln!(out, "🛡️ 条件: {}", rule.condition);
            let _ = writeln!(out, "🧮 公式: {}", rule.formula);
            let _ = writeln!(out, "💬 说明: {}", rule.explanation);
        }
        RuleSet::Multiple(list) => {
            let _ = writeln!(out, "✅ 分析完成，共识别出 {} 个逻辑分支", list.len());
            for (i, rule) in list.iter().enumerate() {
                let _ = writeln!(out);
                let _ = writeln!(out, "[分支 {}]", i + 1);
                let _ = writeln!(out, "🛡️ 条件: {}", rule.condition);
                let _ = writeln!(out, "🧮 公式: {}", rule.formula);
                let _ = writeln!(out, "💬 说明: {}", rule.explanation);
            }
        }
    }
    out
}

/// Error message with the rephrase suggestion
pub fn render_error(message: &str) -> String {
    format!("❌ AI出错了：{}\n💡 建议：{}\n", message, REPHRASE_HINT)
}

/// Input warning, shown without the model error framing
pub fn render_warning(message: &str) -> String {
    format!("⚠️ {}\n", message)
}

/// `{"error": "..."}` for --json mode
pub fn render_error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Vocabulary listing, sorted, in canonical form
pub fn render_vocabulary(vocabulary: &VariableVocabulary) -> String {
    let mut out = format!("可用变量 (共{}个)\n", vocabulary.len());
    for name in vocabulary.sorted() {
        let _ = writeln!(out, "• {}", canonical_reference(name));
    }
    out
}

/// History listing, newest first
pub fn render_history(log: &HistoryLog) -> String {
    if log.is_empty() {
        return "✨ 暂无历史记录\n".to_string();
    }
    let mut out = String::new();
    for (index, record) in log.newest_first() {
        let _ = writeln!(out, "#{} 📅 {} ⚙️ {}", index, record.timestamp, record.preview());
    }
    out
}

/// One history record in full
pub fn render_record(index: usize, record: &HistoryRecord) -> String {
    format!(
        "#{} 📅 {}\n🔧 原始输入: {}\n\n{}",
        index,
        record.timestamp,
        record.input,
        render_rules(&record.result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn rule(n: u32) -> Rule {
        Rule {
            condition: format!("c{}", n),
            formula: format!("f{}", n),
            explanation: "e".to_string(),
        }
    }

    #[test]
    fn test_render_single() {
        let out = render_rules(&RuleSet::Single(rule(1)));
        assert!(out.contains("条件: c1"));
        assert!(out.contains("公式: f1"));
        assert!(out.contains("说明: e"));
    }

    #[test]
    fn test_render_multiple_counts_branches() {
        let out = render_rules(&RuleSet::Multiple(vec![rule(1), rule(2)]));
        assert!(out.contains("共识别出 2 个逻辑分支"));
        assert!(out.contains("[分支 2]"));
        assert!(out.find("c1").unwrap() < out.find("c2").unwrap());
    }

    #[test]
    fn test_render_error_has_hint() {
        let out = render_error("timeout");
        assert!(out.contains("timeout"));
        assert!(out.contains(REPHRASE_HINT));
    }

    #[test]
    fn test_render_warning_is_not_an_ai_error() {
        let out = render_warning("请输入描述内容");
        assert_eq!(out, "⚠️ 请输入描述内容\n");
        assert!(!out.contains("AI出错了"));
    }

    #[test]
    fn test_render_error_json() {
        let value: serde_json::Value = serde_json::from_str(&render_error_json("坏了")).unwrap();
        assert_eq!(value["error"], "坏了");
    }

    #[test]
    fn test_render_vocabulary() {
        let vocab = VariableVocabulary::new(["权重", "最高分"]);
        let out = render_vocabulary(&vocab);
        assert!(out.starts_with("可用变量 (共2个)"));
        assert!(out.contains("• $ 权重 []$"));
    }

    #[test]
    fn test_render_empty_history() {
        assert!(render_history(&HistoryLog::new()).contains("暂无历史记录"));
    }
}
