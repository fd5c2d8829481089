//! Rule records produced by a translation

use serde::{Deserialize, Serialize};

/// One scoring rule: when `condition` holds, the score is `formula`
///
/// Missing fields in model output deserialize as empty strings; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub explanation: String,
}

/// Result of one translation
///
/// Serializes as a bare JSON object (single rule) or a JSON array
/// (one rule per logic branch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSet {
    // Listed first: an untagged struct would also accept a JSON array
    Multiple(Vec<Rule>),
    Single(Rule),
}

impl RuleSet {
    /// All rules in order
    pub fn rules(&self) -> &[Rule] {
        match self {
            RuleSet::Single(rule) => std::slice::from_ref(rule),
            RuleSet::Multiple(rules) => rules,
        }
    }

    /// Number of logic branches
    pub fn len(&self) -> usize {
        self.rules().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    /// Pretty JSON with non-ASCII text kept as-is
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Which JSON shape the model was asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// A single `{...}` object
    #[default]
    Object,
    /// A `[...]` array, one object per logic branch
    Array,
}

impl ResponseShape {
    pub fn open_delimiter(self) -> char {
        match self {
            ResponseShape::Object => '{',
            ResponseShape::Array => '[',
        }
    }

    pub fn close_delimiter(self) -> char {
        match self {
            ResponseShape::Object => '}',
            ResponseShape::Array => ']',
        }
    }
}
