//! Response normalizer and validator
//!
//! Turns raw model output into a [`RuleSet`]:
//! 1. extract the JSON region
//! 2. parse it
//! 3. repair variable references in `condition` and `formula`
//! 4. overwrite `explanation` with the caller's original input
//!
//! Model output is untrusted. Every failure comes back as a
//! [`NormalizeError`]; there is no partial success.

mod extract;
mod repair;

pub use extract::extract_json_region;
pub use repair::fix_var;

use crate::rule::{ResponseShape, Rule, RuleSet};
use crate::vocabulary::VariableVocabulary;
use serde_json::Value as JsonValue;

/// Normalization errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// No opening/closing delimiter pair in the model output
    #[error("AI返回内容不是有效JSON格式")]
    MalformedResponse,

    /// Delimited span is not valid JSON (or not the expected shape)
    #[error("AI返回的JSON无法解析：{0}")]
    InvalidJson(String),

    /// The upstream call failed before any text was produced
    #[error("调用API失败：{0}")]
    UpstreamFailure(String),
}

/// Normalize raw model output into rules
pub fn normalize(
    raw_text: &str,
    vocabulary: &VariableVocabulary,
    original_user_input: &str,
    shape: ResponseShape,
) -> Result<RuleSet, NormalizeError> {
    let region = extract_json_region(raw_text, shape)?;
    let value: JsonValue =
        serde_json::from_str(region).map_err(|e| NormalizeError::InvalidJson(e.to_string()))?;

    let repair = |rule: Rule| Rule {
        condition: fix_var(&rule.condition, vocabulary),
        formula: fix_var(&rule.formula, vocabulary),
        explanation: original_user_input.to_string(),
    };

    match shape {
        ResponseShape::Object => Ok(RuleSet::Single(repair(parse_rule(value)?))),
        ResponseShape::Array => {
            let items = match value {
                JsonValue::Array(items) => items,
                other => {
                    return Err(NormalizeError::InvalidJson(format!(
                        "expected JSON array, found {}",
                        json_kind(&other)
                    )))
                }
            };
            let rules = items
                .into_iter()
                .map(|item| parse_rule(item).map(repair))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RuleSet::Multiple(rules))
        }
    }
}

/// Normalize the result of an upstream call
///
/// An already-failed call is passed through as
/// [`NormalizeError::UpstreamFailure`] without touching its payload.
pub fn normalize_upstream<E: std::fmt::Display>(
    upstream: Result<String, E>,
    vocabulary: &VariableVocabulary,
    original_user_input: &str,
    shape: ResponseShape,
) -> Result<RuleSet, NormalizeError> {
    match upstream {
        Ok(raw_text) => normalize(&raw_text, vocabulary, original_user_input, shape),
        Err(e) => Err(NormalizeError::UpstreamFailure(e.to_string())),
    }
}

/// Read one rule record
///
/// Missing `condition`/`formula` become empty; present non-string values
/// are rejected. `explanation` is replaced by the caller and never checked.
fn parse_rule(value: JsonValue) -> Result<Rule, NormalizeError> {
    let object = match value {
        JsonValue::Object(object) => object,
        other => {
            return Err(NormalizeError::InvalidJson(format!(
                "expected JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    let field = |key: &str| match object.get(key) {
        None => Ok(String::new()),
        Some(JsonValue::String(text)) => Ok(text.clone()),
        Some(other) => Err(NormalizeError::InvalidJson(format!(
            "field `{}` is not a string, found {}",
            key,
            json_kind(other)
        ))),
    };

    Ok(Rule {
        condition: field("condition")?,
        formula: field("formula")?,
        explanation: String::new(),
    })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "完成率低于80%，扣（100-完成率）*0.3分";

    fn vocab() -> VariableVocabulary {
        VariableVocabulary::default()
    }

    #[test]
    fn test_object_in_prose_is_extracted() {
        let raw = r#"blah {"condition":"a","formula":"b","explanation":"c"} blah"#;
        let set = normalize(raw, &vocab(), INPUT, ResponseShape::Object).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.condition, "a");
        assert_eq!(rule.formula, "b");
        assert_eq!(rule.explanation, INPUT);
    }

    #[test]
    fn test_no_braces_is_malformed() {
        let err = normalize("抱歉，我无法理解", &vocab(), INPUT, ResponseShape::Object).unwrap_err();
        assert_eq!(err, NormalizeError::MalformedResponse);
    }

    #[test]
    fn test_trailing_comma_is_invalid_json() {
        let raw = r#"{"condition":"a","formula":"b",}"#;
        let err = normalize(raw, &vocab(), INPUT, ResponseShape::Object).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidJson(_)));
    }

    #[test]
    fn test_array_shape_single_element() {
        let raw = r#"[{"condition":"x","formula":"y"}]"#;
        let set = normalize(raw, &vocab(), INPUT, ResponseShape::Array).unwrap();
        assert_eq!(
            set,
            RuleSet::Multiple(vec![Rule {
                condition: "x".to_string(),
                formula: "y".to_string(),
                explanation: INPUT.to_string(),
            }])
        );
    }

    #[test]
    fn test_array_element_must_be_object() {
        let err = normalize(r#"[{"condition":"x"}, 3]"#, &vocab(), INPUT, ResponseShape::Array)
            .unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidJson(_)));
    }

    #[test]
    fn test_array_shape_rejects_bare_object() {
        // `[` and `]` found only inside a string value
        let raw = r#"{"condition":"[a]"}"#;
        let err = normalize(raw, &vocab(), INPUT, ResponseShape::Array).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let raw = r#"{"explanation": 1}"#;
        let set = normalize(raw, &vocab(), INPUT, ResponseShape::Object).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.condition, "");
        assert_eq!(rule.formula, "");
        assert_eq!(rule.explanation, INPUT);
    }

    #[test]
    fn test_non_string_condition_is_invalid() {
        let err = normalize(r#"{"condition": 1}"#, &vocab(), INPUT, ResponseShape::Object)
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidJson("field `condition` is not a string, found number".to_string())
        );
    }

    #[test]
    fn test_fields_are_repaired() {
        let raw = r#"{"condition":"$机构指标值$ / $ 机构计划值 $ < 0.8","formula":"$权重$ - 1"}"#;
        let set = normalize(raw, &vocab(), INPUT, ResponseShape::Object).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.condition, "$ 机构指标值 []$ / $ 机构计划值 []$ < 0.8");
        assert_eq!(rule.formula, "$ 权重 []$ - 1");
    }

    #[test]
    fn test_upstream_failure_passes_through() {
        let upstream: Result<String, String> = Err("timeout".to_string());
        let err = normalize_upstream(upstream, &vocab(), INPUT, ResponseShape::Object).unwrap_err();
        assert_eq!(err, NormalizeError::UpstreamFailure("timeout".to_string()));
    }
}
