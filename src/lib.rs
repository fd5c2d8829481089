//! kpiforge: natural-language KPI rules to condition/formula expressions
//!
//! The model does the translation. This crate builds the prompt, calls the
//! completion endpoint, and repairs the reply so every variable reference
//! uses the canonical `$ name []$` syntax.

pub mod cli;
pub mod config;
pub mod history;
pub mod llm;
pub mod normalize;
pub mod prompt;
pub mod rule;
pub mod translator;
pub mod vocabulary;

// Re-export the translation core
pub use normalize::{extract_json_region, fix_var, normalize, normalize_upstream, NormalizeError};
pub use prompt::{build_multi_prompt, build_prompt};
pub use rule::{ResponseShape, Rule, RuleSet};
pub use translator::{TranslateError, Translator};
pub use vocabulary::{canonical_reference, VariableVocabulary};

// Re-export the application layer
pub use config::{Config, ConfigError};
pub use history::{HistoryError, HistoryLog, HistoryRecord};
