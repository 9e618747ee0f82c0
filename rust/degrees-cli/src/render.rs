use std::fmt::{Display, Write};

use serde::Serialize;

use degrees_core::{Path, SearchReport};

/// Human-readable result of one search.
///
/// The source is listed first with its own label, then one `-> label - state` line per step.
pub fn render_text<S: Display>(source_label: &str, source: &S, path: Option<&Path<S>>) -> String {
    let Some(path) = path else { return "Articles are not connected.\n".to_string() };
    if path.is_empty() {
        return "The two articles coincide.\n".to_string();
    }
    let n = path.degrees();
    let mut out = String::new();
    let _ = writeln!(out, "{n} {} of separation.\n", if n == 1 { "degree" } else { "degrees" });
    let _ = writeln!(out, "-> {source_label} - {source}");
    for step in path {
        let _ = writeln!(out, "-> {} - {}", step.label, step.state);
    }
    out
}

#[derive(Serialize)]
pub struct JsonReport<'a, S> {
    pub source: &'a S,
    pub target: &'a S,
    #[serde(flatten)]
    pub report: &'a SearchReport<S>,
}

pub fn render_json<S: Serialize>(source: &S, target: &S, report: &SearchReport<S>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { source, target, report })
}
