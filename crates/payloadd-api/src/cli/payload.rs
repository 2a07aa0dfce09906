//! Payload CLI commands: list, info, run.
//!
//! These call the registry in-process. `run` goes straight to dispatch, so an
//! unknown name comes back as a failed result rather than a 404.

use anyhow::{bail, Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use serde_json::Value;

use payloadd_types::result::{PayloadArgs, PayloadResult};

use crate::state::AppState;

/// List all registered payloads.
pub fn list_payloads(state: &AppState, json: bool) -> Result<()> {
    let infos = state.registry.infos();

    if json {
        let names: Vec<&str> = infos.iter().map(|info| info.name.as_str()).collect();
        println!(
            "{}",
            serde_json::json!({"success": true, "payloads": names})
        );
        return Ok(());
    }

    if infos.is_empty() {
        println!();
        println!("  {} No payloads registered.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Parameters").fg(Color::White),
    ]);

    for info in &infos {
        let params = info
            .parameters
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&info.name).fg(Color::Cyan),
            Cell::new(&info.description),
            Cell::new(params).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} payload{}",
        style(infos.len()).bold(),
        if infos.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one payload's description and parameters.
pub fn show_info(state: &AppState, name: &str, json: bool) -> Result<()> {
    let Some(info) = state.registry.info(name) else {
        bail!("Unknown payload: {name}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&info.name).cyan().bold());
    if !info.description.is_empty() {
        println!("  {}", info.description);
    }
    println!();

    if info.parameters.is_empty() {
        println!("  {}", style("No parameters.").dim());
    } else {
        println!("  {}", style("Parameters:").bold());
        for (param, spec) in &info.parameters {
            let mut line = format!("    {} {}", style(param).yellow(), style(&spec.kind).dim());
            if let Some(default) = &spec.default {
                line.push_str(&format!(" (default: {default})"));
            }
            if let Some(description) = &spec.description {
                line.push_str(&format!(" - {description}"));
            }
            println!("{line}");
        }
    }
    println!();

    Ok(())
}

/// Merge `--args` JSON and repeated `--arg key=value` pairs.
///
/// Pairs are applied after the JSON object, so they win on key collisions.
pub fn build_args(json_args: Option<&str>, pairs: Vec<(String, Value)>) -> Result<PayloadArgs> {
    let mut args = match json_args {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--args is not valid JSON")? {
            Value::Object(map) => map,
            other => bail!("--args must be a JSON object, got {other}"),
        },
        None => PayloadArgs::new(),
    };
    args.extend(pairs);
    Ok(args)
}

/// Dispatch a payload and print its result. Returns the result's `success`.
pub fn run_payload(state: &AppState, name: &str, args: &PayloadArgs, json: bool) -> Result<bool> {
    let result = state.registry.dispatch(name, args);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print_result(&result);
    }

    Ok(result.success)
}

fn print_result(result: &PayloadResult) {
    let output = match &result.output {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    };
    if result.success {
        println!("  {} {}", style("✓").green().bold(), output);
    } else {
        println!("  {} {}", style("✗").red().bold(), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloadd_types::config::ServerConfig;
    use serde_json::json;

    #[test]
    fn build_args_merges_pairs_over_json() {
        let args = build_args(
            Some(r#"{"msg": "from json", "n": 1}"#),
            vec![("msg".to_string(), json!("from pair"))],
        )
        .unwrap();
        assert_eq!(args["msg"], "from pair");
        assert_eq!(args["n"], 1);
    }

    #[test]
    fn build_args_without_json_uses_pairs() {
        let args = build_args(None, vec![("k".to_string(), json!(true))]).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args["k"], true);
    }

    #[test]
    fn build_args_rejects_non_object_json() {
        assert!(build_args(Some("[1, 2]"), Vec::new()).is_err());
        assert!(build_args(Some("not json"), Vec::new()).is_err());
    }

    #[test]
    fn numeric_looking_arg_reaches_echo_as_text() {
        let pair = crate::cli::parse_key_value("msg=42").unwrap();
        let args = build_args(None, vec![pair]).unwrap();
        let state = AppState::from_config(&ServerConfig::default());
        let result = state.registry.dispatch("echo", &args);
        assert_eq!(result.output, json!("echo: 42"));
    }

    #[test]
    fn run_payload_reports_success_flag() {
        let state = AppState::from_config(&ServerConfig::default());
        assert!(run_payload(&state, "ping", &PayloadArgs::new(), true).unwrap());
        assert!(!run_payload(&state, "nonexistent", &PayloadArgs::new(), true).unwrap());
    }

    #[test]
    fn show_info_rejects_unknown_payload() {
        let state = AppState::from_config(&ServerConfig::default());
        let err = show_info(&state, "nonexistent", true).unwrap_err();
        assert_eq!(err.to_string(), "Unknown payload: nonexistent");
    }
}
