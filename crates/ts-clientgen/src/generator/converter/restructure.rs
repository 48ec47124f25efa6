//! Query-parameter flattening.
//!
//! Query models arrive with dotted property names (`Filter.Current.Date.From`). They are regrouped
//! into nested synthetic objects, every level's properties are renamed, and a mapping back to the
//! wire names is produced.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
  document::{Model, ModelId, ObjectModel, Property},
  generator::{
    GenerationError,
    ast::PropertyMapping,
    context::{GenerationContext, ModelGraph},
  },
};

/// An object model produced by restructuring, keyed by the node its storage entry belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RestructuredObject {
  pub key: ModelId,
  pub model: ObjectModel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restructured {
  /// Root first, then synthesized levels depth-first.
  pub objects: Vec<RestructuredObject>,
  pub mapping: Vec<PropertyMapping>,
}

pub struct Restructurer<'r, 'g> {
  graph: &'r mut ModelGraph<'g>,
  ctx: &'r mut GenerationContext,
}

impl<'r, 'g> Restructurer<'r, 'g> {
  pub fn new(graph: &'r mut ModelGraph<'g>, ctx: &'r mut GenerationContext) -> Self {
    Self { graph, ctx }
  }

  /// Restructures the query model `root` (stored under `key`) and renames its properties.
  pub fn restructure(&mut self, key: ModelId, root: &ObjectModel) -> Result<Restructured, GenerationError> {
    let mut objects = nest(self.graph, key, root.clone());
    let positions: HashMap<ModelId, usize> = objects
      .iter()
      .enumerate()
      .map(|(index, object)| (object.key, index))
      .collect();

    let mapping = self.remap(&mut objects, &positions, &mut vec![0], &[], &[])?;

    for object in &objects {
      if self.graph.is_synthetic(object.key) {
        self.graph.replace(object.key, Model::Object(object.model.clone()))?;
      }
    }

    Ok(Restructured { objects, mapping })
  }

  fn remap(
    &mut self,
    objects: &mut [RestructuredObject],
    positions: &HashMap<ModelId, usize>,
    ancestors: &mut Vec<usize>,
    base_original: &[String],
    base_path: &[String],
  ) -> Result<Vec<PropertyMapping>, GenerationError> {
    let Some(&index) = ancestors.last() else {
      return Ok(vec![]);
    };
    let scope = self
      .ctx
      .next_restructure_key(&objects[index].model.name, objects[index].model.origin);
    let mut mapping = vec![];

    for position in 0..objects[index].model.properties.len() {
      let property = &mut objects[index].model.properties[position];
      let original = std::mem::take(&mut property.name);
      property.name = self.ctx.naming.unique_property_name(&scope, &original);
      let def = property.def;

      let original_path = with_segment(base_original, &original);
      let object_path = with_segment(base_path, &objects[index].model.properties[position].name);

      // An object already on the current path ends the walk as a leaf.
      let branch_has_additional = if let Some(&child) = positions.get(&def) {
        if ancestors.contains(&child) {
          None
        } else {
          ancestors.push(child);
          let nested = self.remap(objects, positions, ancestors, &original_path, &object_path);
          ancestors.pop();
          mapping.extend(nested?);
          Some(objects[child].model.additional_properties.is_some())
        }
      } else if let Model::Object(object) = self.graph.get(def)? {
        let mut visiting = vec![def];
        mapping.extend(referenced_mapping(
          self.graph,
          object,
          &original_path,
          &object_path,
          &mut visiting,
        )?);
        Some(object.additional_properties.is_some())
      } else {
        None
      };

      if branch_has_additional != Some(false) {
        mapping.push(PropertyMapping {
          original_name: original_path.join("."),
          object_path,
        });
      }
    }

    Ok(mapping)
  }
}

/// Groups properties by first dotted segment and moves every fully prefixed group into a new
/// synthetic object. A group where any member lacks the `"{segment}."` prefix stays flat.
fn nest(graph: &mut ModelGraph<'_>, key: ModelId, mut object: ObjectModel) -> Vec<RestructuredObject> {
  let mut groups: IndexMap<String, Vec<Property>> = IndexMap::new();

  for property in std::mem::take(&mut object.properties) {
    let segments: Vec<&str> = property.name.split('.').collect();
    let group = if segments.len() > 1 && segments.iter().all(|segment| !segment.is_empty()) {
      segments[0].to_string()
    } else {
      property.name.clone()
    };

    if !group.is_empty() {
      groups.entry(group).or_default().push(property);
    }
  }

  let mut nested = vec![];

  for (segment, members) in groups {
    let prefix = format!("{segment}.");
    if members.iter().any(|member| !member.name.starts_with(&prefix)) {
      object.properties.extend(members);
      continue;
    }

    let child = ObjectModel {
      name: format!("{} {segment}", object.name),
      original_name: object.original_name.clone(),
      origin: object.origin,
      properties: members
        .into_iter()
        .map(|mut member| {
          member.name = member.name[prefix.len()..].to_string();
          member
        })
        .collect(),
      ..ObjectModel::default()
    };

    let child_id = graph.push(Model::Object(child.clone()));
    object.properties.push(Property::new(segment, child_id));
    nested.extend(nest(graph, child_id, child));
  }

  let mut objects = vec![RestructuredObject { key, model: object }];
  objects.extend(nested);
  objects
}

/// Mapping leaves below an object the document itself defines. Its property names are kept as
/// they are, and a model already on the current path ends the walk as a leaf.
fn referenced_mapping(
  graph: &ModelGraph<'_>,
  object: &ObjectModel,
  base_original: &[String],
  base_path: &[String],
  visiting: &mut Vec<ModelId>,
) -> Result<Vec<PropertyMapping>, GenerationError> {
  let mut mapping = vec![];

  for property in &object.properties {
    let original_path = with_segment(base_original, &property.name);
    let object_path = with_segment(base_path, &property.name);

    let branch_has_additional = match graph.get(property.def)? {
      Model::Object(child) if !visiting.contains(&property.def) => {
        visiting.push(property.def);
        mapping.extend(referenced_mapping(graph, child, &original_path, &object_path, visiting)?);
        visiting.pop();
        Some(child.additional_properties.is_some())
      }
      _ => None,
    };

    if branch_has_additional != Some(false) {
      mapping.push(PropertyMapping {
        original_name: original_path.join("."),
        object_path,
      });
    }
  }

  Ok(mapping)
}

fn with_segment(base: &[String], segment: &str) -> Vec<String> {
  let mut path = base.to_vec();
  path.push(segment.to_string());
  path
}
