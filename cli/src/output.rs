use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Renders `value` as pretty JSON or YAML. `Text` falls back to compact JSON.
pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(serde_json::to_string(value)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => {
            let json_value = serde_json::to_value(value)?;
            Ok(serde_yml::to_string(&json_value)?)
        }
    }
}
