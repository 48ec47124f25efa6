//! Normalized API document consumed by the generator.
//!
//! Every schema node lives in one arena ([`Document::nodes`]) and is referenced by a [`ModelId`].
//! Identity is the handle: two structurally equal nodes with distinct ids are distinct models.

use std::fmt;

use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

mod validation;


pub use validation::DocumentError;

pub type Extensions = IndexMap<String, Value>;

/// Security requirement: scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub usize);

impl fmt::Display for ModelId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Where an object or enum model was synthesized from by the schema engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModelOrigin {
  #[default]
  None,
  PathParameters,
  QueryParameters,
  FormData,
  Body,
  Response,
}

impl ModelOrigin {
  /// Type suffix appended to generated names of models that carry no original name.
  #[must_use]
  pub const fn name_suffix(self) -> Option<&'static str> {
    match self {
      Self::None => None,
      Self::PathParameters => Some("PathParameters"),
      Self::QueryParameters => Some("QueryParameters"),
      Self::FormData => Some("FormData"),
      Self::Body => Some("Body"),
      Self::Response => Some("Response"),
    }
  }

  #[must_use]
  pub const fn label(self) -> Option<&'static str> {
    match self {
      Self::None => None,
      Self::PathParameters => Some("path parameters"),
      Self::QueryParameters => Some("query parameters"),
      Self::FormData => Some("form data"),
      Self::Body => Some("body"),
      Self::Response => Some("response"),
    }
  }
}

/// Models that receive an allocated name in the reference-entity scope.
pub trait NamedModel {
  fn name(&self) -> &str;
  fn original_name(&self) -> Option<&str>;
  fn origin(&self) -> ModelOrigin;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Model {
  Object(ObjectModel),
  Enum(EnumModel),
  Array(ArrayModel),
  Simple(SimpleModel),
  Extended(ExtendedModel),
  Null,
  Constant(ConstantModel),
  Unknown,
}

impl Model {
  #[must_use]
  pub const fn as_object(&self) -> Option<&ObjectModel> {
    match self {
      Self::Object(object) => Some(object),
      _ => None,
    }
  }

  #[must_use]
  pub const fn as_enum(&self) -> Option<&EnumModel> {
    match self {
      Self::Enum(model) => Some(model),
      _ => None,
    }
  }

  /// Object and enum models are emitted as named, importable symbols.
  #[must_use]
  pub const fn is_reference(&self) -> bool {
    matches!(self, Self::Object(_) | Self::Enum(_))
  }

  #[must_use]
  pub fn description(&self) -> Option<&str> {
    match self {
      Self::Object(object) => object.description.as_deref(),
      Self::Enum(model) => model.description.as_deref(),
      _ => None,
    }
  }

  /// Handles of every node this node points at.
  #[must_use]
  pub fn references(&self) -> Vec<ModelId> {
    match self {
      Self::Object(object) => object
        .properties
        .iter()
        .map(|property| property.def)
        .chain(object.additional_properties)
        .collect(),
      Self::Array(array) => vec![array.items],
      Self::Extended(extended) => extended.members.clone(),
      Self::Enum(_) | Self::Simple(_) | Self::Null | Self::Constant(_) | Self::Unknown => vec![],
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectModel {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub original_name: Option<String>,
  pub origin: ModelOrigin,
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub extensions: Extensions,
  pub properties: Vec<Property>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub additional_properties: Option<ModelId>,
}

impl ObjectModel {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }
}

impl NamedModel for ObjectModel {
  fn name(&self) -> &str {
    &self.name
  }

  fn original_name(&self) -> Option<&str> {
    self.original_name.as_deref()
  }

  fn origin(&self) -> ModelOrigin {
    self.origin
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
  pub name: String,
  pub def: ModelId,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub extensions: Extensions,
}

impl Property {
  pub fn new(name: impl Into<String>, def: ModelId) -> Self {
    Self {
      name: name.into(),
      def,
      required: false,
      deprecated: false,
      description: None,
      extensions: Extensions::new(),
    }
  }

  #[must_use]
  pub fn required(mut self) -> Self {
    self.required = true;
    self
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumModel {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub original_name: Option<String>,
  pub origin: ModelOrigin,
  /// Scalar type of the entries, e.g. `string` or `integer`.
  #[serde(rename = "type")]
  pub type_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  pub entries: Vec<EnumEntry>,
  pub deprecated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub extensions: Extensions,
}

impl NamedModel for EnumModel {
  fn name(&self) -> &str {
    &self.name
  }

  fn original_name(&self) -> Option<&str> {
    self.original_name.as_deref()
  }

  fn origin(&self) -> ModelOrigin {
    self.origin
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumEntry {
  pub name: String,
  pub value: Value,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub extensions: Extensions,
}

impl EnumEntry {
  /// The entry value as a JavaScript `String(value)` would render it.
  #[must_use]
  pub fn value_text(&self) -> String {
    match &self.value {
      Value::String(text) => text.clone(),
      other => other.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayModel {
  pub items: ModelId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleModel {
  #[serde(rename = "type")]
  pub type_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
  And,
  Or,
}

impl Combinator {
  #[must_use]
  pub const fn delimiter(self) -> &'static str {
    match self {
      Self::And => " & ",
      Self::Or => " | ",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedModel {
  pub combinator: Combinator,
  #[serde(default)]
  pub members: Vec<ModelId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantModel {
  pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
  pub media: String,
  pub content: ModelId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub required: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
  pub code: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub media: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<ModelId>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// One operation: an HTTP method bound to a URL pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPath {
  pub url_pattern: String,
  #[serde(with = "method_serde")]
  pub method: Method,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summaries: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub descriptions: Option<Vec<String>>,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default)]
  pub extensions: Extensions,
  #[serde(default)]
  pub security: Vec<SecurityRequirement>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub request_path_parameters: Option<ModelId>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub request_query_parameters: Option<ModelId>,
  #[serde(default)]
  pub request_bodies: Vec<RequestBody>,
  #[serde(default)]
  pub responses: Vec<Response>,
}

impl ApiPath {
  pub fn new(url_pattern: impl Into<String>, method: Method) -> Self {
    Self {
      url_pattern: url_pattern.into(),
      method,
      operation_id: None,
      tags: None,
      summaries: None,
      descriptions: None,
      deprecated: false,
      extensions: Extensions::new(),
      security: vec![],
      request_path_parameters: None,
      request_query_parameters: None,
      request_bodies: vec![],
      responses: vec![],
    }
  }

  /// String-valued extension, ignoring empty strings.
  #[must_use]
  pub fn string_extension(&self, key: &str) -> Option<&str> {
    self
      .extensions
      .get(key)
      .and_then(Value::as_str)
      .filter(|value| !value.is_empty())
  }

  /// Every model handle this path points at, labelled for error reporting.
  pub(crate) fn references(&self) -> impl Iterator<Item = ModelId> + '_ {
    self
      .request_path_parameters
      .into_iter()
      .chain(self.request_query_parameters)
      .chain(self.request_bodies.iter().map(|body| body.content))
      .chain(self.responses.iter().filter_map(|response| response.content))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentInfo {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
  pub url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Document {
  pub info: DocumentInfo,
  /// Node arena; every [`ModelId`] indexes into it.
  pub nodes: Vec<Model>,
  /// Top-level models in declaration order.
  pub models: Vec<ModelId>,
  pub paths: Vec<ApiPath>,
  pub servers: Vec<Server>,
  pub tags: Vec<Tag>,
}

impl Document {
  #[must_use]
  pub fn node(&self, id: ModelId) -> Option<&Model> {
    self.nodes.get(id.0)
  }

  pub fn add_node(&mut self, model: Model) -> ModelId {
    self.nodes.push(model);
    ModelId(self.nodes.len() - 1)
  }

  /// Adds a node and lists it among the top-level models.
  pub fn add_model(&mut self, model: Model) -> ModelId {
    let id = self.add_node(model);
    self.models.push(id);
    id
  }

  #[must_use]
  pub fn base_url(&self) -> Option<&str> {
    self.servers.first().map(|server| server.url.as_str())
  }

  #[must_use]
  pub fn tag_description(&self, name: &str) -> Option<&str> {
    self
      .tags
      .iter()
      .find(|tag| tag.name == name)
      .and_then(|tag| tag.description.as_deref())
  }
}

pub(crate) mod method_serde {
  use http::Method;
  use serde::{Deserialize, Deserializer, Serializer};

  pub(crate) fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(method.as_str())
  }

  pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(serde::de::Error::custom)
  }
}
