//! Output formatting for the CLI.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{HikariArgs, OutputFormat};
use crate::error::Result;
use crate::index::{IndexStats, KanjiIndex};

/// Result structure for an indexing run.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexingResult {
    pub input_path: String,
    pub source: String,
    pub output_path: String,
    pub stats: IndexStats,
    pub duration_ms: u64,
}

/// Write the index document to `path`.
///
/// Kanji and kana are written as-is rather than `\u` escaped.
pub fn write_index(path: &Path, index: &KanjiIndex, pretty: bool) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, index)?;
    } else {
        serde_json::to_writer(&mut writer, index)?;
    }
    writer.flush()?;

    Ok(())
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &HikariArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &HikariArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }

    println!("{message}");
    println!();

    let value = serde_json::to_value(result)?;
    output_generic_human(&value, 0);

    Ok(())
}

/// Print a JSON value as indented `key: value` lines.
fn output_generic_human(value: &serde_json::Value, depth: usize) {
    let indent = "  ".repeat(depth);

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(_) => {
                        println!("{indent}{}:", format_key(key));
                        output_generic_human(val, depth + 1);
                    }
                    serde_json::Value::String(s) => println!("{indent}{}: {s}", format_key(key)),
                    _ => println!("{indent}{}: {val}", format_key(key)),
                }
            }
        }
        _ => println!("{indent}{value}"),
    }
}

/// Turn `snake_case` field names into `Title case` labels.
fn format_key(key: &str) -> String {
    let label = key.replace('_', " ");
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => label,
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HikariArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
