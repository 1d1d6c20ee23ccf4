//! ExpLang JavaScript Back End Library
//!
//! This library lowers the validated, type-annotated ExpLang IR into
//! executable JavaScript source text.

pub mod codegen;
pub mod compiler;
pub mod error;
pub mod ir;

// Re-export commonly used types
pub use codegen::{generate, generate_runtime, JsGenerator, MethodCtx};
pub use compiler::{compact_whitespace, package_program, AnalyzedProgram, Diagnostic};
pub use error::{CodegenError, ExpError, ExpResult, IrError};
pub use ir::{Expression, Module, Statement, Type};
