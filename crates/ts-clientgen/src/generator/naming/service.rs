use std::collections::{HashMap, HashSet};

use crate::{
  document::{ApiPath, NamedModel},
  generator::conventions::Conventions,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamingScope {
  /// Enums and object models share one namespace.
  ReferenceEntity,
  Service,
  /// Operations of one service, keyed by the service name.
  Operation(String),
  /// Properties of one restructured object, keyed by its restructuring key.
  Property(String),
}

/// Allocates names that are unique within a scope for the lifetime of one run.
pub struct NamingService {
  conventions: Box<dyn Conventions>,
  registry: HashMap<NamingScope, HashSet<String>>,
}

impl NamingService {
  pub fn new(conventions: Box<dyn Conventions>) -> Self {
    Self {
      conventions,
      registry: HashMap::new(),
    }
  }

  pub fn conventions(&self) -> &dyn Conventions {
    self.conventions.as_ref()
  }

  pub fn unique_enum_name(&mut self, entity: &impl NamedModel) -> String {
    let (name, suffix) = raw_name(entity);
    self.allocate(NamingScope::ReferenceEntity, |conventions, modifier| {
      conventions.enum_name(name, modifier, suffix)
    })
  }

  pub fn unique_model_name(&mut self, entity: &impl NamedModel) -> String {
    let (name, suffix) = raw_name(entity);
    self.allocate(NamingScope::ReferenceEntity, |conventions, modifier| {
      conventions.model_name(name, modifier, suffix)
    })
  }

  pub fn unique_service_name(&mut self, name: &str) -> String {
    self.allocate(NamingScope::Service, |conventions, modifier| {
      conventions.service_name(name, modifier)
    })
  }

  pub fn unique_operation_name(&mut self, service: &str, path: &ApiPath) -> String {
    self.allocate(NamingScope::Operation(service.to_string()), |conventions, modifier| {
      conventions.operation_name(path, modifier)
    })
  }

  pub fn unique_property_name(&mut self, object_key: &str, name: &str) -> String {
    self.allocate(NamingScope::Property(object_key.to_string()), |conventions, modifier| {
      conventions.property_name(name, modifier)
    })
  }

  /// Formats a service name without reserving it.
  pub fn service_name(&self, name: &str) -> String {
    self.conventions.service_name(name, None)
  }

  pub fn is_reserved(&self, scope: &NamingScope, name: &str) -> bool {
    self.registry.get(scope).is_some_and(|names| names.contains(name))
  }

  fn allocate(&mut self, scope: NamingScope, format: impl Fn(&dyn Conventions, Option<usize>) -> String) -> String {
    let names = self.registry.entry(scope).or_default();
    let mut modifier = None;

    loop {
      let candidate = format(self.conventions.as_ref(), modifier);
      if names.insert(candidate.clone()) {
        return candidate;
      }
      modifier = Some(modifier.map_or(1, |value| value + 1));
    }
  }
}

/// Name and type suffix; the suffix applies only to models without an original name.
fn raw_name(entity: &impl NamedModel) -> (&str, Option<&'static str>) {
  let has_original_name = entity.original_name().is_some_and(|name| !name.is_empty());
  let suffix = if has_original_name {
    None
  } else {
    entity.origin().name_suffix()
  };

  (entity.name(), suffix)
}
