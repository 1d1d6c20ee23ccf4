//! Code generation module for the ExpLang back end.
//!
//! This module lowers a validated IR module into JavaScript source text,
//! together with the fixed runtime prelude the generated text depends on.

mod expr_codegen;
mod generator;
mod names;
mod output;
mod runtime;
mod stmt_codegen;

pub use generator::{generate, JsGenerator, MethodCtx};
pub use names::NameAllocator;
pub use output::IndentedText;
pub use runtime::generate_runtime;
