//! Show command - Print the resolved settings mapping.

use std::borrow::Cow;

use serde::Serialize;

use common::AppResult;

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::{ResolvedConfig, Settings};

#[derive(Serialize)]
struct ShowOutput<'a> {
    mode: &'a str,
    settings: &'a Settings,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &ResolvedConfig) -> AppResult<()> {
    println!("{}", render(&args, config)?);
    Ok(())
}

/// Render the settings in the requested format.
pub fn render(args: &ShowArgs, config: &ResolvedConfig) -> AppResult<String> {
    let settings = if args.reveal {
        config.settings()
    } else {
        config.redacted_settings()
    };

    match args.format {
        OutputFormat::Json => {
            let output = ShowOutput {
                mode: config.mode().as_str(),
                settings: &settings,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Env => Ok(settings
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|value| format!("{}={}", key.to_uppercase(), env_quote(value)))
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Quote a value so dotenv parsers read it back unchanged.
///
/// Plain tokens stay bare. Anything else is double-quoted with `\\`, `"`,
/// `$` and newlines escaped.
fn env_quote(value: &str) -> Cow<'_, str> {
    let is_plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'));
    if is_plain {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
