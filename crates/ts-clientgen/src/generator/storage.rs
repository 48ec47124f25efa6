use std::collections::HashMap;

use crate::{
  document::{Model, ModelId},
  generator::ast::{GeneratedEnum, GeneratedModel, PropertyMapping},
};

/// Memoized facts about one schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEntry<T> {
  pub name: Option<String>,
  pub generated: Option<T>,
  pub mapping: Option<Vec<PropertyMapping>>,
}

impl<T> Default for StorageEntry<T> {
  fn default() -> Self {
    Self {
      name: None,
      generated: None,
      mapping: None,
    }
  }
}

impl<T> StorageEntry<T> {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Self::default()
    }
  }

  pub fn generated(generated: T) -> Self {
    Self {
      generated: Some(generated),
      ..Self::default()
    }
  }

  pub fn mapped(mapping: Vec<PropertyMapping>) -> Self {
    Self {
      mapping: Some(mapping),
      ..Self::default()
    }
  }

  /// Fields present in `patch` win; absent ones keep their current value.
  fn merge(&mut self, patch: Self) {
    if let Some(name) = patch.name {
      self.name = Some(name);
    }
    if let Some(generated) = patch.generated {
      self.generated = Some(generated);
    }
    if let Some(mapping) = patch.mapping {
      self.mapping = Some(mapping);
    }
  }
}

/// Per-node cache keyed by arena identity, with separate keyspaces for enums and objects.
///
/// The typed `*_enum` / `*_model` accessors trust the caller to know the node's variant;
/// [`ModelStorage::name_of`] and [`ModelStorage::delete`] pick the keyspace from the node itself.
#[derive(Debug, Default)]
pub struct ModelStorage {
  enums: HashMap<ModelId, StorageEntry<GeneratedEnum>>,
  models: HashMap<ModelId, StorageEntry<GeneratedModel>>,
}

impl ModelStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn enum_entry(&self, id: ModelId) -> Option<&StorageEntry<GeneratedEnum>> {
    self.enums.get(&id)
  }

  pub fn set_enum(&mut self, id: ModelId, patch: StorageEntry<GeneratedEnum>) {
    self.enums.entry(id).or_default().merge(patch);
  }

  pub fn delete_enum(&mut self, id: ModelId) {
    self.enums.remove(&id);
  }

  pub fn model_entry(&self, id: ModelId) -> Option<&StorageEntry<GeneratedModel>> {
    self.models.get(&id)
  }

  pub fn set_model(&mut self, id: ModelId, patch: StorageEntry<GeneratedModel>) {
    self.models.entry(id).or_default().merge(patch);
  }

  pub fn delete_model(&mut self, id: ModelId) {
    self.models.remove(&id);
  }

  pub fn enum_name(&self, id: ModelId) -> Option<&str> {
    self.enum_entry(id).and_then(|entry| entry.name.as_deref())
  }

  pub fn model_name(&self, id: ModelId) -> Option<&str> {
    self.model_entry(id).and_then(|entry| entry.name.as_deref())
  }

  /// Allocated name of `model`, looked up in the keyspace its variant belongs to.
  pub fn name_of(&self, id: ModelId, model: &Model) -> Option<&str> {
    match model {
      Model::Enum(_) => self.enum_name(id),
      Model::Object(_) => self.model_name(id),
      _ => None,
    }
  }

  pub fn delete(&mut self, id: ModelId, model: &Model) {
    match model {
      Model::Enum(_) => self.delete_enum(id),
      Model::Object(_) => self.delete_model(id),
      _ => {}
    }
  }
}
