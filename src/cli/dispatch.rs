//! CLI mode dispatch
//!
//! Dispatches to the mode handlers:
//! - translate: prompt → model → normalized rules (+ history, + file)
//! - prompt: print the rendered prompt
//! - vars: list the vocabulary
//! - history: list / show / export / clear

use crate::cli::render;
use crate::cli::{
    Args, Error, HistoryAction, InputArgs, Mode, Result, EXIT_CONFIG_ERROR, EXIT_FAILURE,
    EXIT_SUCCESS,
};
use crate::config::Config;
use crate::history::HistoryLog;
use crate::llm::LlmAdapter;
use crate::prompt::{prompt_for, EXAMPLE_INPUT};
use crate::rule::{ResponseShape, RuleSet};
use crate::translator::{TranslateError, Translator};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Default result file name for a single rule
pub const SINGLE_RESULT_FILE: &str = "kpi_formula.json";
/// Default result file name for multi-branch rules
pub const MULTI_RESULT_FILE: &str = "kpi_rules.json";

/// Run CLI mode and return exit code
///
/// Called from main() after argument parsing.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let json = args.json;
    let mut stdout = std::io::stdout();

    match run(args, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, json);
            match e {
                Error::Config(_) => EXIT_CONFIG_ERROR,
                _ => EXIT_FAILURE,
            }
        }
    }
}

/// Run the selected mode, writing results to `out`
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    match args.mode {
        Mode::Translate {
            input,
            output,
            model,
            base_url,
            timeout,
        } => {
            let text = resolve_input(&input)?;
            if text.trim().is_empty() {
                return Err(TranslateError::EmptyInput.into());
            }

            let config = resolve_translate_config(args.config.as_deref(), model, base_url, timeout)?;
            let adapter = config.llm.build_adapter()?;
            let translator = Translator::new(adapter, config.vocabulary());
            run_translate(
                &translator,
                &text,
                shape_of(&input),
                output.as_deref(),
                args.history.as_deref(),
                args.json,
                out,
            )?;
        }
        Mode::Prompt { input } => {
            let config = Config::resolve(args.config.as_deref())?;
            let text = resolve_input(&input)?;
            let prompt = prompt_for(shape_of(&input), &config.vocabulary(), &text);
            out.write_all(prompt.as_bytes())?;
        }
        Mode::Vars => {
            let config = Config::resolve(args.config.as_deref())?;
            let vocabulary = config.vocabulary();
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&vocabulary.sorted())?)?;
            } else {
                out.write_all(render::render_vocabulary(&vocabulary).as_bytes())?;
            }
        }
        Mode::History { action } => {
            let path = args
                .history
                .ok_or_else(|| Error::MissingArgument("history requires --history <FILE>".to_string()))?;
            run_history(&path, action, args.json, out)?;
        }
    }
    Ok(())
}

/// Resolve configuration and apply the translate flag overrides
pub fn resolve_translate_config(
    path: Option<&Path>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<u64>,
) -> Result<Config> {
    let mut config = Config::resolve(path)?;
    if let Some(model) = model {
        config.llm.model = model;
    }
    if let Some(base_url) = base_url {
        config.llm.base_url = base_url;
    }
    if let Some(timeout) = timeout {
        config.llm.timeout_secs = timeout;
    }
    Ok(config)
}

/// Translate one rule, print it, and record it
///
/// Nothing is printed, written or recorded when translation fails.
pub fn run_translate<A: LlmAdapter, W: Write>(
    translator: &Translator<A>,
    text: &str,
    shape: ResponseShape,
    output: Option<&Path>,
    history: Option<&Path>,
    json: bool,
    out: &mut W,
) -> Result<RuleSet> {
    let rules = translator.translate(text, shape)?;
    let pretty = rules.to_pretty_json()?;

    if json {
        writeln!(out, "{}", pretty)?;
    } else {
        out.write_all(render::render_rules(&rules).as_bytes())?;
    }

    if let Some(path) = output {
        let path = result_path(path, shape);
        std::fs::write(&path, &pretty)?;
        tracing::info!(path = %path.display(), "result written");
        if !json {
            writeln!(out, "💾 已保存: {}", path.display())?;
        }
    }

    if let Some(path) = history {
        let mut log = HistoryLog::load(path)?;
        log.append(text, rules.clone());
        log.save(path)?;
        tracing::debug!(path = %path.display(), records = log.len(), "history updated");
    }

    Ok(rules)
}

/// Run a history action against the file at `path`
pub fn run_history<W: Write>(path: &Path, action: HistoryAction, json: bool, out: &mut W) -> Result<()> {
    let mut log = HistoryLog::load(path)?;

    match action {
        HistoryAction::List => {
            if json {
                let records: Vec<_> = log.newest_first().map(|(_, r)| r).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            } else {
                out.write_all(render::render_history(&log).as_bytes())?;
            }
        }
        HistoryAction::Show { index } => {
            let record = log.get(index)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
            } else {
                out.write_all(render::render_record(index, record).as_bytes())?;
            }
        }
        HistoryAction::Export { index, output } => {
            let record = log.get(index)?;
            let target = output.unwrap_or_else(|| PathBuf::from(record.export_file_name(index)));
            std::fs::write(&target, record.result.to_pretty_json()?)?;
            writeln!(out, "📥 已导出: {}", target.display())?;
        }
        HistoryAction::Clear => {
            log.clear();
            log.save(path)?;
            writeln!(out, "🗑️ 历史记录已清空")?;
        }
    }
    Ok(())
}

/// Rule text from the argument, the sample rule, or stdin
fn resolve_input(input: &InputArgs) -> Result<String> {
    if input.example {
        return Ok(EXAMPLE_INPUT.to_string());
    }
    match &input.text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn shape_of(input: &InputArgs) -> ResponseShape {
    if input.multi {
        ResponseShape::Array
    } else {
        ResponseShape::Object
    }
}

/// Output target; a directory gets the default file name for the shape
fn result_path(path: &Path, shape: ResponseShape) -> PathBuf {
    if path.is_dir() {
        let name = match shape {
            ResponseShape::Object => SINGLE_RESULT_FILE,
            ResponseShape::Array => MULTI_RESULT_FILE,
        };
        path.join(name)
    } else {
        path.to_path_buf()
    }
}

fn report_error(error: &Error, json: bool) {
    let message = error.to_string();
    if json {
        println!("{}", render::render_error_json(&message));
        return;
    }
    match error {
        Error::Translate(TranslateError::EmptyInput) => eprint!("{}", render::render_warning(&message)),
        Error::Translate(_) => eprint!("{}", render::render_error(&message)),
        _ => eprintln!("Error: {}", message),
    }
}
