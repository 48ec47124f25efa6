//! Pluggable formatting and scalar-type hooks.
//!
//! Every method has a default; override only the ones a target needs to change.

use crate::{
  document::ApiPath,
  generator::naming::identifiers::{to_camel_case, to_pascal_case},
};

pub const OPERATION_NAME_EXTENSION: &str = "x-operation-name";

fn modifier_text(modifier: Option<usize>) -> String {
  modifier.map(|value| value.to_string()).unwrap_or_default()
}

pub trait Conventions {
  fn enum_name(&self, name: &str, modifier: Option<usize>, suffix: Option<&str>) -> String {
    to_pascal_case(&format!("{name} {} {}", modifier_text(modifier), suffix.unwrap_or_default()))
  }

  fn model_name(&self, name: &str, modifier: Option<usize>, suffix: Option<&str>) -> String {
    to_pascal_case(&format!("{name} {} {}", modifier_text(modifier), suffix.unwrap_or_default()))
  }

  fn service_name(&self, name: &str, modifier: Option<usize>) -> String {
    to_pascal_case(&format!("{name} {}", modifier_text(modifier)))
  }

  fn property_name(&self, name: &str, modifier: Option<usize>) -> String {
    to_camel_case(&format!("{name} {}", modifier_text(modifier)))
  }

  /// `x-operation-name`, then `operationId`, then `"{method} {urlPattern}"`.
  fn operation_name(&self, path: &ApiPath, modifier: Option<usize>) -> String {
    let modifier = modifier_text(modifier);

    if let Some(name) = path.string_extension(OPERATION_NAME_EXTENSION) {
      return to_camel_case(&format!("{name} {modifier}"));
    }

    match path.operation_id.as_deref().filter(|id| !id.is_empty()) {
      Some(operation_id) => to_camel_case(&format!("{operation_id} {modifier}")),
      None => to_camel_case(&format!("{} {} {modifier}", path.method, path.url_pattern)),
    }
  }

  /// Maps a schema scalar to a TypeScript type; `None` falls back to `unknown`.
  fn simple_type(&self, type_name: &str, format: Option<&str>) -> Option<String> {
    match (type_name, format) {
      ("boolean", _) => Some("boolean".to_string()),
      ("integer" | "number", _) => Some("number".to_string()),
      ("file", _) | ("string", Some("binary")) => Some("Blob".to_string()),
      ("string", _) => Some("string".to_string()),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConventions;

impl Conventions for DefaultConventions {}
