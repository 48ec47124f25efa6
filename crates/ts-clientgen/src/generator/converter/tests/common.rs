use serde_json::Value;

use crate::{
  document::{EnumEntry, EnumModel, Model, ObjectModel, Property, SimpleModel},
  generator::{
    config::{GeneratorConfig, GeneratorKind},
    context::GenerationContext,
    conventions::DefaultConventions,
  },
};

pub(crate) fn create_context(kind: GeneratorKind) -> GenerationContext {
  GenerationContext::new(Box::new(DefaultConventions), GeneratorConfig::default(), kind.layout())
}

pub(crate) fn simple(type_name: &str) -> Model {
  Model::Simple(SimpleModel {
    type_name: type_name.to_string(),
    format: None,
  })
}

pub(crate) fn object(name: &str, properties: Vec<Property>) -> ObjectModel {
  ObjectModel {
    properties,
    ..ObjectModel::new(name)
  }
}

pub(crate) fn string_enum(name: &str, values: &[&str]) -> EnumModel {
  EnumModel {
    name: name.to_string(),
    original_name: Some(name.to_string()),
    type_name: "string".to_string(),
    entries: values
      .iter()
      .map(|value| EnumEntry {
        name: (*value).to_string(),
        value: Value::String((*value).to_string()),
        deprecated: false,
        description: None,
        extensions: Default::default(),
      })
      .collect(),
    ..EnumModel::default()
  }
}
