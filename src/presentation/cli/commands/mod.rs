pub mod greeting;
pub mod repository;
pub mod standup;

pub use greeting::*;
pub use repository::*;
pub use standup::*;

use serde::Serialize;

use crate::presentation::cli::OutputFormat;

/// Render a value as JSON or YAML for `--output json|yaml`
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Text => Err(anyhow::anyhow!("Text output has no structured rendering")),
    }
}
