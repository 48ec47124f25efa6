#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
//! Code-synthesis core for TypeScript API clients.
//!
//! The input is an already normalized [`document::Document`]; the output is an ordered list of
//! [`generator::ast::FileDescriptor`]s (path, template id, template data) ready for rendering.

pub mod document;
pub mod generator;
pub mod utils;

#[cfg(test)]
mod tests;
