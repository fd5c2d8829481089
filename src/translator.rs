//! Translation pipeline
//!
//! input → prompt → model → normalize. Adapter failures surface as
//! [`NormalizeError::UpstreamFailure`]; nothing is retried here.

use crate::llm::LlmAdapter;
use crate::normalize::{normalize_upstream, NormalizeError};
use crate::prompt::prompt_for;
use crate::rule::{ResponseShape, RuleSet};
use crate::vocabulary::VariableVocabulary;

/// Suggestion shown alongside any translation error
pub const REPHRASE_HINT: &str =
    "请用清晰的句子，例如：‘每超10万加2分’、‘完成率在60%~80%之间得3分’";

/// Translation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Input is empty or whitespace
    #[error("请输入描述内容")]
    EmptyInput,

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Natural-language rule translator
#[derive(Debug)]
pub struct Translator<A> {
    adapter: A,
    vocabulary: VariableVocabulary,
}

impl<A: LlmAdapter> Translator<A> {
    pub fn new(adapter: A, vocabulary: VariableVocabulary) -> Self {
        Self {
            adapter,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &VariableVocabulary {
        &self.vocabulary
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Translate one rule description
    ///
    /// `shape` selects the single-rule or multi-branch prompt and the
    /// matching extraction delimiters.
    pub fn translate(&self, user_input: &str, shape: ResponseShape) -> Result<RuleSet, TranslateError> {
        if user_input.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let prompt = prompt_for(shape, &self.vocabulary, user_input);
        tracing::debug!(
            provider = self.adapter.provider_name(),
            ?shape,
            prompt_len = prompt.len(),
            "translating"
        );

        let upstream = self.adapter.generate(&prompt);
        if let Err(ref e) = upstream {
            tracing::warn!(error = %e, "completion request failed");
        }

        let result = normalize_upstream(upstream, &self.vocabulary, user_input, shape);
        match &result {
            Ok(rules) => tracing::info!(branches = rules.len(), "translation normalized"),
            Err(e) => tracing::warn!(error = %e, "translation rejected"),
        }
        result.map_err(TranslateError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::AdapterError;
    use std::sync::Mutex;

    /// Adapter returning a canned reply and recording prompts
    struct CannedAdapter {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedAdapter {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                reply: Err(msg.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmAdapter for CannedAdapter {
        fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(AdapterError::Network)
        }

        fn provider_name(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn test_empty_input_is_rejected_before_calling_model() {
        let translator = Translator::new(CannedAdapter::ok("{}"), VariableVocabulary::default());
        let err = translator.translate("  \n", ResponseShape::Object).unwrap_err();
        assert_eq!(err, TranslateError::EmptyInput);
        assert!(translator.adapter().prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_single_rule_translation() {
        let reply = r#"结果：{"condition":"$机构指标值$ > 0","formula":"$ 权重 $","explanation":"模型复述"}"#;
        let translator = Translator::new(CannedAdapter::ok(reply), VariableVocabulary::default());
        let set = translator.translate("指标为正得满分", ResponseShape::Object).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.condition, "$ 机构指标值 []$ > 0");
        assert_eq!(rule.formula, "$ 权重 []$");
        assert_eq!(rule.explanation, "指标为正得满分");
    }

    #[test]
    fn test_shape_selects_prompt() {
        let translator = Translator::new(CannedAdapter::ok("[]"), VariableVocabulary::default());
        let set = translator.translate("x", ResponseShape::Array).unwrap();
        assert!(set.is_empty());
        let prompts = translator.adapter().prompts.lock().unwrap();
        assert!(prompts[0].contains("JSON 数组"));
    }

    #[test]
    fn test_adapter_failure_is_upstream_failure() {
        let translator = Translator::new(CannedAdapter::failing("timed out"), VariableVocabulary::default());
        let err = translator.translate("x", ResponseShape::Object).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Normalize(NormalizeError::UpstreamFailure(ref msg)) if msg.contains("timed out")
        ));
    }
}
