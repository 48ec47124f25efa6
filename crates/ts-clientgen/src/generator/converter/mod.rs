//! Conversion of document nodes into generated records and file descriptors.

use indexmap::IndexSet;

use crate::document::{Document, Model, ModelId};

pub mod enums;
pub mod models;
pub mod paths;
pub mod restructure;
pub mod type_resolver;

#[cfg(test)]
mod tests;

pub use enums::EnumConverter;
pub use models::ModelConverter;
pub use paths::PathConverter;
pub use restructure::Restructurer;
pub use type_resolver::TypeResolver;

/// Top-level models matching `predicate`, descending into extended models. Each node appears once,
/// in first-seen order.
pub fn select_models(document: &Document, predicate: impl Fn(&Model) -> bool) -> Vec<ModelId> {
  let mut selected = IndexSet::new();
  let mut visited = IndexSet::new();
  collect(document, &document.models, &predicate, &mut selected, &mut visited);
  selected.into_iter().collect()
}

fn collect(
  document: &Document,
  ids: &[ModelId],
  predicate: &impl Fn(&Model) -> bool,
  selected: &mut IndexSet<ModelId>,
  visited: &mut IndexSet<ModelId>,
) {
  for &id in ids {
    let Some(model) = document.node(id) else {
      continue;
    };

    if predicate(model) {
      selected.insert(id);
    } else if let Model::Extended(extended) = model
      && visited.insert(id)
    {
      collect(document, &extended.members, predicate, selected, visited);
    }
  }
}
