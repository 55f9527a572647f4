//! Turns catalog payloads into terminal output.
//!
//! Machine mode prints the payload untouched (pretty, two-space indent, key
//! order preserved). Human mode has one renderer per command. Renderers are
//! total: sparse or oddly-shaped JSON never fails a command.

pub mod fields;

use crate::command::Command;

use fields::{
    array, display_name, display_value, distance, field, pretty_json, score, text, text_or,
    truncate_chars, truthy_field,
};

use serde_json::Value;

/// Maximum characters of an `Inputs:` schema shown by `load`.
pub const INPUTS_PREVIEW_CHARS: usize = 600;

const MACHINE_INDENT: &[u8] = b"  ";
const INPUTS_INDENT: &[u8] = b"    ";
const OUTPUT_INDENT: &[u8] = b"  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    /// `--json`: raw payload, no per-command formatting.
    Machine,
}

/// Render `payload` for `command`. Non-empty output ends with a newline.
pub fn render(command: &Command, payload: &Value, mode: OutputMode) -> String {
    let lines = match mode {
        OutputMode::Machine => vec![pretty_json(payload, MACHINE_INDENT)],
        OutputMode::Human => match command {
            Command::ListApis => render_apis(payload),
            Command::Search { query, .. } => render_search(query, payload),
            Command::PublicSearch { query, .. } => render_public_search(query, payload),
            Command::Load { .. } => render_load(payload),
            Command::Execute { .. } => render_execute(payload),
        },
    };

    if lines.is_empty() {
        return String::new();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_apis(payload: &Value) -> Vec<String> {
    let apis = payload.as_array().map(Vec::as_slice).unwrap_or(&[]);

    let mut lines = vec![format!("Scoped APIs ({}):", apis.len())];
    lines.extend(apis.iter().map(|api| {
        format!(
            "  {}/{}  v{}",
            text(api, "api_vendor"),
            text(api, "api_name"),
            text(api, "api_version"),
        )
    }));
    lines
}

pub fn render_search(query: &str, payload: &Value) -> Vec<String> {
    let results = array(payload, "results");
    let total = text(payload, "total_count");

    let mut lines = vec![format!(
        "Results for '{query}' ({} of {total}):",
        results.len()
    )];
    for entry in results {
        push_entry(&mut lines, entry);
    }
    lines
}

/// Operations, workflows and apis merged and stably sorted by ascending distance.
pub fn merge_public_results(payload: &Value) -> Vec<&Value> {
    let mut merged: Vec<&Value> = array(payload, "operations")
        .iter()
        .chain(array(payload, "workflows"))
        .chain(array(payload, "apis"))
        .collect();
    merged.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
    merged
}

pub fn render_public_search(query: &str, payload: &Value) -> Vec<String> {
    let merged = merge_public_results(payload);

    let mut lines = vec![format!(
        "Public catalog results for '{query}' ({}):",
        merged.len()
    )];
    for entry in merged {
        push_entry(&mut lines, entry);
    }
    lines
}

fn push_entry(lines: &mut Vec<String>, entry: &Value) {
    lines.push(format!(
        "  [{}] {} — {}",
        text(entry, "id"),
        text_or(entry, "api_name", ""),
        display_name(entry),
    ));

    let entity_type = text(entry, "entity_type");
    let score = score(entry);
    match truthy_field(entry, "path") {
        Some(path) => lines.push(format!(
            "    {} {}  ({entity_type}, score: {score})",
            text_or(entry, "method", ""),
            display_value(path),
        )),
        None => lines.push(format!("    {entity_type}  score: {score}")),
    }
}

pub fn render_load(payload: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(operations) = field(payload, "operations").and_then(Value::as_object) {
        for (uid, operation) in operations {
            lines.push(format!("Operation: {uid}"));
            lines.push(format!(
                "  {} {}  [{}]",
                text(operation, "method"),
                text(operation, "path"),
                text(operation, "api_name"),
            ));
            lines.push(format!("  Summary: {}", text(operation, "summary")));
            let auth = truthy_field(operation, "security_requirements")
                .map(display_value)
                .unwrap_or_else(|| String::from("none"));
            lines.push(format!("  Auth: {auth}"));
            push_inputs(&mut lines, operation);
        }
    }

    if let Some(workflows) = field(payload, "workflows").and_then(Value::as_object) {
        for (uid, workflow) in workflows {
            lines.push(format!("Workflow: {uid}"));
            lines.push(format!("  Name: {}", text(workflow, "name")));
            push_inputs(&mut lines, workflow);
        }
    }

    lines
}

fn push_inputs(lines: &mut Vec<String>, entry: &Value) {
    if let Some(inputs) = truthy_field(entry, "inputs") {
        let schema = pretty_json(inputs, INPUTS_INDENT);
        lines.push(format!(
            "  Inputs: {}",
            truncate_chars(&schema, INPUTS_PREVIEW_CHARS)
        ));
    }
}

pub fn render_execute(payload: &Value) -> Vec<String> {
    let mut lines = vec![format!(
        "Success: {}  Status: {}",
        text(payload, "success"),
        text(payload, "status_code"),
    )];

    if let Some(error) = truthy_field(payload, "error") {
        lines.push(format!("Error: {}", display_value(error)));
    }

    if let Some(output) = field(payload, "output") {
        let rendered = match output {
            Value::Object(_) | Value::Array(_) => pretty_json(output, OUTPUT_INDENT),
            scalar => display_value(scalar),
        };
        lines.push(String::from("Output:"));
        lines.push(rendered);
    }

    lines
}
