//! Compile filter and order statements from the command line

use super::CliError;
use crate::resolver::{builtins_from_json, default_builtins, Builtins};
use crate::{OrderCompiler, QueryCompiler};

/// Options shared by the filter and order commands
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// The query or order statement to compile
    pub query: String,
    /// Builtins map as a JSON object of name/column pairs; the default
    /// node builtins are used when not given
    pub builtins: Option<String>,
    /// Column holding the node's JSON content document
    pub content_column: String,
    /// Active locale id for bare `path` references
    pub locale: String,
}

fn builtins(options: &CompileOptions) -> Result<Builtins, CliError> {
    match &options.builtins {
        Some(json) => Ok(builtins_from_json(json)?),
        None => Ok(default_builtins()),
    }
}

/// Compile a filter query into a condition fragment
pub fn compile_filter(options: &CompileOptions) -> Result<String, CliError> {
    let compiler = QueryCompiler::new(
        builtins(options)?,
        options.content_column.clone(),
        options.locale.clone(),
    );

    Ok(compiler.compile(&options.query)?)
}

/// Compile an order statement into an ORDER BY fragment
pub fn compile_order(options: &CompileOptions) -> Result<String, CliError> {
    let compiler = OrderCompiler::new(
        builtins(options)?,
        options.content_column.clone(),
        options.locale.clone(),
    );

    Ok(compiler.compile(&options.query)?)
}
