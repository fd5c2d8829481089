//! Prompt builder
//!
//! Renders the instruction sent to the model. Pure functions of the
//! vocabulary and the user's text: no validation, no side effects.

mod templates;

pub use templates::{EXAMPLE_CONDITION, EXAMPLE_FORMULA, EXAMPLE_INPUT, OPERATOR_WHITELIST};

use crate::rule::ResponseShape;
use crate::vocabulary::VariableVocabulary;

/// Build the single-rule prompt (model answers with one JSON object)
pub fn build_prompt(vocabulary: &VariableVocabulary, user_input: &str) -> String {
    render(
        vocabulary,
        &templates::object_output_section(),
        user_input,
        "JSON",
    )
}

/// Build the multi-branch prompt (model answers with a JSON array)
pub fn build_multi_prompt(vocabulary: &VariableVocabulary, user_input: &str) -> String {
    render(
        vocabulary,
        &templates::array_output_section(),
        user_input,
        "JSON 数组",
    )
}

/// Build the prompt matching the expected response shape
pub fn prompt_for(shape: ResponseShape, vocabulary: &VariableVocabulary, user_input: &str) -> String {
    match shape {
        ResponseShape::Object => build_prompt(vocabulary, user_input),
        ResponseShape::Array => build_multi_prompt(vocabulary, user_input),
    }
}

fn render(
    vocabulary: &VariableVocabulary,
    output_section: &str,
    user_input: &str,
    expect: &str,
) -> String {
    let var_list = vocabulary.iter().collect::<Vec<_>>().join(", ");

    let mut prompt = String::new();
    prompt.push_str(templates::preamble());
    prompt.push_str("\n\n");
    prompt.push_str(&templates::variable_rules(&var_list));
    prompt.push_str("\n\n");
    prompt.push_str(&templates::formula_rules());
    prompt.push_str("\n\n");
    prompt.push_str(output_section);
    prompt.push_str("\n\n");
    prompt.push_str(&templates::input_section(user_input, expect));
    prompt
}
