//! Renderers for built expressions
//!
//! Each renderer is a full set of combinators over its own value type. The parser hands those
//! values around without looking at them, so the same expression can come out as SQL text or
//! as a serializable tree.

pub mod sql;
pub mod tree;

use filterex::{is_valid, ExpressionBuilder};
use filterex_config::{FilterexConfig, OutputFormat};

/// Validates, builds and renders `source` in the requested output format
pub fn render(
    source: &str,
    format: OutputFormat,
    config: &FilterexConfig,
) -> Result<String, String> {
    if !is_valid(source) {
        return Err(format!("Invalid expression: {source:?}"));
    }

    match format {
        OutputFormat::Sql => {
            let builder = ExpressionBuilder::new(sql::combinators(&config.render));
            builder
                .build_value(source, |leaf| sql::term(&config.render, &leaf))
                .map_err(|e| format!("Build failed: {}", e))
        }
        OutputFormat::Json => {
            let predicate = build_tree(source)?;
            let rendered = if config.output.pretty {
                serde_json::to_string_pretty(&predicate)
            } else {
                serde_json::to_string(&predicate)
            };
            rendered.map_err(|e| format!("JSON serialization failed: {}", e))
        }
        OutputFormat::Yaml => {
            // serde_yaml writes enum variants as YAML tags; going through a JSON value keeps
            // the same shape as the JSON output
            let predicate = serde_json::to_value(build_tree(source)?)
                .map_err(|e| format!("YAML serialization failed: {}", e))?;
            serde_yaml::to_string(&predicate)
                .map_err(|e| format!("YAML serialization failed: {}", e))
        }
    }
}

fn build_tree(source: &str) -> Result<tree::Predicate, String> {
    ExpressionBuilder::new(tree::combinators())
        .build_value(source, tree::Predicate::Term)
        .map_err(|e| format!("Build failed: {}", e))
}
