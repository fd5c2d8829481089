//! Fixed prompt text
//!
//! Rule and example wording sent to the model. The operator whitelist and
//! the reference syntax appear both in the rules and in the worked example.

/// Sample rule used by the worked example and `--example`
pub const EXAMPLE_INPUT: &str = "完成率在60%至100%（不含）之间，每少完成10%，扣0.5分";

/// Expected condition for [`EXAMPLE_INPUT`]
pub const EXAMPLE_CONDITION: &str = "$ 机构目标值 []$ != 0 and $ 机构指标值 []$ / $ 机构计划值 []$ > 0.6 and $ 机构指标值 []$ / $ 机构计划值 []$ < 1";

/// Expected formula for [`EXAMPLE_INPUT`]
pub const EXAMPLE_FORMULA: &str = "$ 权重 []$ - (($ 机构计划值 []$ - $ 机构指标值 []$) * 100 / $ 机构计划值 []$) / 10 * 0.5";

/// Operators a condition or formula may use
pub const OPERATOR_WHITELIST: &str = "+ - * / > < >= <= != = ( )";

/// Role preamble
pub fn preamble() -> &'static str {
    "你是一个银行业绩考核系统AI专家，必须严格遵守以下规则："
}

/// Variable rules, with the vocabulary spliced in
pub fn variable_rules(var_list: &str) -> String {
    format!(
        "【变量规范】
- 你只能使用以下变量（完全匹配，禁止任何修改）：{var_list}
- 所有变量必须写成：$ 变量名 []$，例如：$ 机构目标值 []$，$ 权重 []$，$ 机构指标值 []$（注意有空格和 []）"
    )
}

/// Formula rules
pub fn formula_rules() -> String {
    format!(
        "【公式规范】
- 公式只允许使用：{OPERATOR_WHITELIST}
- 所有“完成率”必须写作：$ 机构指标值 []$ / $ 机构计划值 []$
- 百分比计算：必须写为 * 100 / 某值，禁止写 0.1 或 10%
- 不允许使用函数：IF、SUM、MAX、AVERAGE 等"
    )
}

fn example_object(indent: &str) -> String {
    format!(
        "{indent}{{
{indent}  \"condition\": \"{EXAMPLE_CONDITION}\",
{indent}  \"formula\": \"{EXAMPLE_FORMULA}\",
{indent}  \"explanation\": \"{EXAMPLE_INPUT}\"
{indent}}}"
    )
}

/// Output format and worked example for a single JSON object
pub fn object_output_section() -> String {
    format!(
        "【输出格式】
必须输出严格的 JSON 格式，不要任何额外文字：
{{
  \"condition\": \"条件表达式\",
  \"formula\": \"计算公式\",
  \"explanation\": \"原输入语句（原样输出）\"
}}

【示例】
输入：{EXAMPLE_INPUT}
输出：
{}",
        example_object("")
    )
}

/// Output format and worked example for a JSON array of branches
pub fn array_output_section() -> String {
    format!(
        "【输出格式】
一条规则可能包含多个逻辑分支，每个分支输出一个对象。
必须输出严格的 JSON 数组格式，不要任何额外文字：
[
  {{
    \"condition\": \"分支条件表达式\",
    \"formula\": \"分支计算公式\",
    \"explanation\": \"原输入语句（原样输出）\"
  }}
]

【示例】
输入：{EXAMPLE_INPUT}
输出：
[
{}
]",
        example_object("  ")
    )
}

/// Closing instruction with the user's text quoted
pub fn input_section(user_input: &str, expect: &str) -> String {
    format!("你现在接收一条新输入，请输出{expect}：\n输入：\"{user_input}\"\n")
}
