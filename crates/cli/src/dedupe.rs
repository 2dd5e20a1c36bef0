//! `leadset dedupe` / `leadset validate` — the document pipeline.

use std::path::{Path, PathBuf};

use leadset_recon::engine;
use leadset_recon::report::{render_changelog, render_document};
use leadset_recon::source::parse_document;
use leadset_recon::{DedupeConfig, DedupeError};

use crate::exit_codes::{EXIT_DEDUPE_DROPPED, EXIT_ERROR};
use crate::CliError;

/// Map an engine-crate error onto its exit code.
fn engine_err(err: DedupeError) -> CliError {
    match err {
        DedupeError::Render(_) => CliError {
            code: EXIT_ERROR,
            message: err.to_string(),
            hint: None,
        },
        _ => CliError::parse(err.to_string()),
    }
}

fn load_config(path: Option<&Path>) -> Result<DedupeConfig, CliError> {
    match path {
        None => Ok(DedupeConfig::default()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
            DedupeConfig::from_toml(&raw).map_err(engine_err)
        }
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("cannot read {}: {e}", path.display()))
            .with_hint("provide a JSON lead document, e.g. leads.json")
    })
}

/// Sibling path `<stem><suffix>` next to the input file.
fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "leads".into());
    input.with_file_name(format!("{stem}{suffix}"))
}

pub fn cmd_dedupe(
    input: PathBuf,
    config_path: Option<PathBuf>,
    json_output: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let raw = read_input(&input)?;
    let leads = parse_document(&raw, &config.array_key).map_err(engine_err)?;

    let result = engine::run(&config, &leads);

    let dupless_path =
        output_file.unwrap_or_else(|| with_suffix(&input, &config.output.dupless_suffix));
    let changelog_path = with_suffix(&input, &config.output.changelog_suffix);

    let document = render_document(&result.leads).map_err(engine_err)?;
    std::fs::write(&dupless_path, &document)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", dupless_path.display())))?;

    let changelog = render_changelog(&result.changes);
    std::fs::write(&changelog_path, &changelog)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", changelog_path.display())))?;

    if json_output {
        let json_str = serde_json::to_string_pretty(&result).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
    } else if !quiet {
        print!("{changelog}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "dedupe '{}': {} records in — {} kept, {} replaced, {} dropped",
        result.meta.config_name, s.input, s.kept, s.replaced, s.dropped,
    );
    eprintln!("wrote {}", dupless_path.display());
    eprintln!("wrote {}", changelog_path.display());

    if config.fail_on_drop && s.dropped > 0 {
        return Err(CliError {
            code: EXIT_DEDUPE_DROPPED,
            message: format!(
                "{} record(s) dropped without an audit trail (fail_on_drop)",
                s.dropped
            ),
            hint: None,
        });
    }

    Ok(())
}

pub fn cmd_validate(input: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let raw = read_input(&input)?;
    let leads = parse_document(&raw, &config.array_key).map_err(engine_err)?;

    eprintln!(
        "valid: {} lead record(s) in {}",
        leads.len(),
        input.display()
    );
    Ok(())
}
