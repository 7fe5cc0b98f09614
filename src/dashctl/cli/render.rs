//! # Rendering
//!
//! Response bodies are printed in one of three output modes, chosen once per
//! invocation and applied the same way to every verb:
//!
//! - `Pretty`: keys sorted recursively, 2-space indentation. Stable across runs,
//!   so showing the same dashboard twice prints the same bytes.
//! - `Raw`: the body as received, compact.
//! - `Default`: currently the same as `Raw`.
//!
//! Messages are colored by level. Warnings and errors always go to stderr.
//! Info and success lines go to stdout only when no response body is printed,
//! so a rendered body is the only thing on stdout.

use colored::Colorize;
use dashctl::api::{CmdMessage, MessageLevel};
use dashctl::error::DashError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Pretty,
    Raw,
    #[default]
    Default,
}

pub fn render_response(body: &Value, mode: OutputMode) -> String {
    match mode {
        OutputMode::Pretty => serde_json::to_string_pretty(&sort_keys(body))
            .unwrap_or_else(|_| body.to_string()),
        OutputMode::Raw | OutputMode::Default => body.to_string(),
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

fn stream_for(level: &MessageLevel, body_follows: bool) -> Stream {
    match level {
        MessageLevel::Info | MessageLevel::Success if !body_follows => Stream::Stdout,
        _ => Stream::Stderr,
    }
}

pub(super) fn print_messages(messages: &[CmdMessage], body_follows: bool) {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        match stream_for(&message.level, body_follows) {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Prints a fatal error, preceded by any warnings the service sent with it.
pub fn print_error(error: &DashError) {
    for warning in error.warnings() {
        eprintln!("{}", format!("Warning: {}", warning).yellow());
    }
    eprintln!("{} {}", "Error:".red(), error);
}
