use serde_json::Value;

use crate::{
  document::{EnumModel, Model, ModelId, ObjectModel, Property},
  generator::{
    GenerationError,
    context::{GenerationContext, ModelGraph},
    storage::StorageEntry,
  },
};

pub(crate) const UNKNOWN_TYPE: &str = "unknown";

/// Maps schema nodes to TypeScript type expressions, naming referenced models on first sight.
pub struct TypeResolver<'r, 'g> {
  graph: &'r ModelGraph<'g>,
  ctx: &'r mut GenerationContext,
}

impl<'r, 'g> TypeResolver<'r, 'g> {
  pub fn new(graph: &'r ModelGraph<'g>, ctx: &'r mut GenerationContext) -> Self {
    Self { graph, ctx }
  }

  pub fn resolve_type(&mut self, id: ModelId) -> Result<String, GenerationError> {
    self.resolve(id, false, false)
  }

  pub fn resolve_property_type(&mut self, property: &Property) -> Result<String, GenerationError> {
    self.resolve(property.def, false, false)
  }

  /// Names of the reference models `id` needs imported. Scalars and inline types contribute nothing.
  pub fn resolve_dependencies(&mut self, id: ModelId) -> Result<Vec<String>, GenerationError> {
    let graph = self.graph;
    let mut base = id;
    while let Model::Array(array) = graph.get(base)? {
      base = array.items;
    }

    match graph.get(base)? {
      Model::Extended(extended) => {
        let mut dependencies = vec![];
        for &member in &extended.members {
          dependencies.extend(self.resolve_dependencies(member)?);
        }
        Ok(dependencies)
      }
      Model::Object(_) | Model::Enum(_) => Ok(vec![self.resolve(base, false, true)?]),
      _ => Ok(vec![]),
    }
  }

  fn resolve(&mut self, id: ModelId, in_array: bool, ignore_array_wrap: bool) -> Result<String, GenerationError> {
    let graph = self.graph;

    let resolved = match graph.get(id)? {
      Model::Object(object) => self.object_name(id, object),
      Model::Enum(model) => self.enum_name(id, model),
      Model::Array(array) => self.resolve(array.items, true, ignore_array_wrap)?,
      Model::Extended(extended) if !extended.members.is_empty() => {
        let members = extended
          .members
          .iter()
          .map(|&member| self.resolve(member, false, false))
          .collect::<Result<Vec<_>, _>>()?;
        let joined = members.join(extended.combinator.delimiter());
        if members.len() > 1 { format!("({joined})") } else { joined }
      }
      Model::Null => "null".to_string(),
      Model::Constant(constant) => match &constant.value {
        Value::String(text) => format!("'{text}'"),
        other => other.to_string(),
      },
      Model::Simple(simple) => self
        .ctx
        .naming
        .conventions()
        .simple_type(&simple.type_name, simple.format.as_deref())
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
      Model::Extended(_) | Model::Unknown => UNKNOWN_TYPE.to_string(),
    };

    Ok(if in_array && !ignore_array_wrap {
      format!("Array<{resolved}>")
    } else {
      resolved
    })
  }

  fn object_name(&mut self, id: ModelId, object: &ObjectModel) -> String {
    if let Some(name) = self.ctx.storage.model_name(id) {
      return name.to_string();
    }
    let name = self.ctx.naming.unique_model_name(object);
    self.ctx.storage.set_model(id, StorageEntry::named(name.clone()));
    name
  }

  fn enum_name(&mut self, id: ModelId, model: &EnumModel) -> String {
    if let Some(name) = self.ctx.storage.enum_name(id) {
      return name.to_string();
    }
    let name = self.ctx.naming.unique_enum_name(model);
    self.ctx.storage.set_enum(id, StorageEntry::named(name.clone()));
    name
  }
}
