//! Compile pipeline for the JSX lowering pass.
//!
//! Parse the module with oxc, run the lowering visitor over it, and print
//! the rewritten program. The lowering itself is total; the only failures
//! surfaced here are parse failures of the input module or of the options
//! JSON handed over by the build pipeline.

use oxc_allocator::Allocator;
use oxc_ast_visit::VisitMut;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::{Deserialize, Serialize};

use crate::lowerer::VNodeLowerer;

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Hoisting style for the factory binding. The build pipeline passes this
/// as `true`/`false` or as a module source string, hence the untagged
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportSource {
    Enabled(bool),
    From(String),
}

impl Default for ImportSource {
    fn default() -> Self {
        ImportSource::Enabled(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LowerOptions {
    /// Dotted or simple override for the factory call target. When set, no
    /// binding is hoisted; the target is assumed to already be in scope.
    pub pragma: Option<String>,
    /// When truthy, hoist an import of the factory instead of aliasing the
    /// runtime namespace object; a string overrides the module source.
    pub imports: ImportSource,
}

impl LowerOptions {
    pub fn from_json(json: &str) -> Result<Self, CompilerError> {
        serde_json::from_str(json)
            .map_err(|e| CompilerError::new("Z-OPTIONS-001", &e.to_string(), "<options>"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESULTS AND ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResult {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerError {
    pub code: String,
    pub message: String,
    pub file: String,
}

impl CompilerError {
    pub fn new(code: &str, message: &str, file: &str) -> Self {
        CompilerError {
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
        }
    }
}

impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.file, self.message)
    }
}

impl std::error::Error for CompilerError {}

// ═══════════════════════════════════════════════════════════════════════════════
// PIPELINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Lower every JSX element in `source` and return the rewritten module.
pub fn compile_jsx_internal(
    source: &str,
    file_path: &str,
    options: &LowerOptions,
) -> Result<CompileResult, CompilerError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true).with_jsx(true);
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        return Err(CompilerError::new("Z-PARSE-001", &message, file_path));
    }

    let mut program = ret.program;
    let mut lowerer = VNodeLowerer::new(&allocator, options.clone());
    lowerer.visit_program(&mut program);

    Ok(CompileResult {
        code: Codegen::new().build(&program).code,
    })
}
