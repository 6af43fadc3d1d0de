pub(crate) mod automations;
pub(crate) mod kpis;
pub(crate) mod runs;
pub(crate) mod scenarios;

use std::process;

use serde_json::{Map, Value};

use crate::{report_error, OutputFormat};

/// Print a decoded record (or list of records) as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Parse a `--flag '{...}'` value as a JSON object, exiting on bad input.
pub(crate) fn parse_json_object(
    raw: Option<String>,
    flag: &str,
    output: OutputFormat,
    quiet: bool,
) -> Option<Map<String, Value>> {
    let raw = raw?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            report_error(
                &format!("error: --{} must be a JSON object", flag),
                output,
                quiet,
            );
            process::exit(1);
        }
        Err(e) => {
            report_error(
                &format!("error: could not parse --{} as JSON: {}", flag, e),
                output,
                quiet,
            );
            process::exit(1);
        }
    }
}
