//! Render JSON input as a JavaScript literal

use log::debug;

use super::CliError;
use crate::ast::{Expression, Identifier, Statement};
use crate::quote::QuoteChar;
use crate::{RenderConfig, render, to_expression};

/// Options for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// JSON input string
    pub input: Option<String>,
    /// Declare the value as `var NAME=...`
    pub variable: Option<String>,
    /// Quote character for strings with no better choice
    pub quote_char: Option<QuoteChar>,
    /// Quote object keys, producing JSON-compatible output
    pub json_keys: bool,
    /// Wrap the output in a `<script>` element
    pub script_block: bool,
}

/// Execute a convert operation, returning the rendered source
pub fn execute_convert(options: &ConvertOptions) -> Result<String, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let value = to_expression(&json_value)?;

    let statement = match &options.variable {
        Some(name) => {
            let target = Expression::Identifier(Identifier::new(name.as_str())?);
            Statement::Expression(Expression::declare([target.assign(value)]))
        }
        None => Statement::Expression(value),
    };

    let config = RenderConfig {
        quote_char: options.quote_char.unwrap_or(QuoteChar::Double),
        always_quote_object_keys: options.json_keys,
        script_block: options.script_block,
        trailing_terminator: options.variable.is_some(),
        ..RenderConfig::default()
    };
    debug!("rendering with {:?}", config);

    Ok(render(&statement, &config)?)
}
