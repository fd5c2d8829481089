//! Variable vocabulary
//!
//! The closed set of variable names a generated condition or formula may
//! reference. Built once at startup and shared read-only by the prompt
//! builder and the normalizer.

use std::collections::BTreeSet;

/// Variable names accepted by the downstream KPI scoring system.
pub const DEFAULT_VARIABLES: &[&str] = &[
    "机构标准扣罚单价",
    "机构分组2增量贡献度",
    "机构考核基数",
    "对比基数",
    "行员目标值",
    "年末",
    "利润参数",
    "行员标准计酬单价",
    "机构考核得分",
    "行员指标值",
    "当年已计价工资",
    "行员力争值",
    "机构标准计酬单价",
    "考核月份",
    "维度权重",
    "机构指标值(2位小数)",
    "机构超力争得分系数",
    "机构力争值",
    "地区差异系数",
    "行员超任务单价",
    "行员计划值",
    "机构计划值",
    "最高分",
    "代码描述",
    "行员考核基数",
    "职能部室挂靠支行数",
    "行员考核得分",
    "行员标准得分系数",
    "职能部室挂靠支行得分",
    "行员新增单价",
    "最低分",
    "权重",
    "机构进度值",
    "考核总分",
    "职能部室挂靠支行业绩",
    "机构标准得分系数",
    "不良清收奖励",
    "存款保底基数",
    "机构指标值",
    "指标值",
    "机构超计划得分系数",
    "机构指标区间值",
    "是否中山分行",
    "行员绩效工资",
    "机构分组1增量贡献度",
    "机构公共户业绩",
    "行员指标区间值",
    "机构目标值2",
    "行员超计划得分系数",
    "机构指标分组平均",
    "无维度参数",
];

/// Immutable set of variable names
///
/// Names are compared by exact string equality and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableVocabulary {
    names: BTreeSet<String>,
}

impl VariableVocabulary {
    /// Build a vocabulary from arbitrary names (duplicates collapse)
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in vocabulary extended with extra names (e.g. from config)
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> =
            DEFAULT_VARIABLES.iter().map(|s| s.to_string()).collect();
        names.extend(extra.into_iter().map(Into::into).filter(|n: &String| !n.is_empty()));
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate names in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names sorted for display
    pub fn sorted(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Names ordered longest first (by character count, ties lexicographic)
    ///
    /// Replacement passes must run in this order so a short name never
    /// matches inside a longer name that contains it.
    pub fn longest_first(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        names
    }
}

impl Default for VariableVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLES.iter().copied())
    }
}

/// Render a name in the canonical reference syntax: `$ name []$`
pub fn canonical_reference(name: &str) -> String {
    format!("$ {} []$", name)
}
