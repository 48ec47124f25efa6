//! Target-shaped records produced by the converters. Immutable once built.

use bon::Builder;
use http::Method;
use serde::Serialize;
use serde_json::Value;

use crate::document::{Extensions, SecurityRequirement, method_serde};

pub mod documentation;
pub mod files;


pub use documentation::{JsDocBuilder, JsDocConfig, JsDocParam, JsDocReturns};
pub use files::{
  EnumTemplateData, FileDescriptor, IndexTemplateData, InternalsTemplateData, ModelTemplateData, RequestVarNames,
  ServiceTemplateData, TemplateData, parametrize_url_pattern,
};

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProperty {
  #[builder(into)]
  pub name: String,
  #[serde(rename = "type")]
  #[builder(into)]
  pub type_name: String,
  #[builder(default)]
  pub required: bool,
  #[builder(default)]
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[builder(default)]
  pub extensions: Extensions,
  #[builder(default)]
  pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModel {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub properties: Vec<GeneratedProperty>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub addition_properties_type_name: Option<String>,
  #[builder(default)]
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[builder(default)]
  pub dependencies: Vec<String>,
}

impl GeneratedModel {
  /// Dependencies of the model and of every property, in declaration order.
  pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
    self
      .properties
      .iter()
      .flat_map(|property| property.dependencies.iter())
      .chain(&self.dependencies)
      .map(String::as_str)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEnumEntry {
  pub name: String,
  pub value: Value,
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub extensions: Extensions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEnum {
  pub name: String,
  pub is_stringly_typed: bool,
  pub entries: Vec<GeneratedEnumEntry>,
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub extensions: Extensions,
}

/// Links a flattened query parameter to its place in the restructured object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMapping {
  /// Dotted name as it appears on the wire, e.g. `Filter.Current.ClientId`.
  pub original_name: String,
  /// Generated property names from the root object, e.g. `["filter", "current", "clientId"]`.
  pub object_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBody {
  pub type_name: String,
  pub media: String,
  pub required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path_parameters_type: Option<GeneratedModel>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query_parameters_type: Option<GeneratedModel>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query_parameters_mapping: Option<Vec<PropertyMapping>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<GeneratedBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponse {
  pub type_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub media: Option<String>,
  pub dependencies: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl GeneratedResponse {
  pub fn void() -> Self {
    Self {
      type_name: "void".to_string(),
      media: None,
      dependencies: vec![],
      description: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
  pub name: String,
  pub url_pattern: String,
  #[serde(with = "method_serde")]
  pub method: Method,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  pub request: GeneratedRequest,
  pub response: GeneratedResponse,
  #[builder(default)]
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summaries: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub descriptions: Option<Vec<String>>,
  #[builder(default)]
  pub extensions: Extensions,
  #[builder(default)]
  pub security: Vec<SecurityRequirement>,
}
