use crate::{
  document::{ModelId, ModelOrigin, ObjectModel, Property},
  generator::{
    GenerationError,
    ast::{FileDescriptor, GeneratedModel, GeneratedProperty, ModelTemplateData, TemplateData},
    context::{GenerationContext, ModelGraph},
    converter::{
      restructure::{RestructuredObject, Restructurer},
      type_resolver::TypeResolver,
    },
    metrics::{GenerationEvent, OriginNote},
    storage::StorageEntry,
  },
  utils::paths,
};

/// Emits one file per top-level object model.
pub struct ModelConverter<'r, 'g> {
  graph: &'r mut ModelGraph<'g>,
  ctx: &'r mut GenerationContext,
}

impl<'r, 'g> ModelConverter<'r, 'g> {
  pub fn new(graph: &'r mut ModelGraph<'g>, ctx: &'r mut GenerationContext) -> Self {
    Self { graph, ctx }
  }

  pub fn convert(&mut self, objects: &[ModelId]) -> Result<Vec<FileDescriptor>, GenerationError> {
    let mut files = vec![];

    for &id in objects {
      let Some(object) = self.graph.get(id)?.as_object().cloned() else {
        continue;
      };

      self.ctx.event(GenerationEvent::CreatingModel {
        name: object.name.clone(),
        origin: OriginNote(object.origin),
      });

      let models = self.build_models(id, &object)?;
      let Some(main) = models.first() else {
        return Err(GenerationError::EmptyModelFile { model: object.name });
      };

      let layout = &self.ctx.layout;
      let path = paths::join(layout.model_dir, &layout.model_file_names.resolve(&main.name));
      let template = layout.model_template;

      self.ctx.storage.set_model(
        id,
        StorageEntry {
          name: Some(main.name.clone()),
          generated: Some(main.clone()),
          mapping: None,
        },
      );

      if self.ctx.config.inline_path_parameters && object.origin == ModelOrigin::PathParameters {
        self.ctx.event(GenerationEvent::SkippedInlineModel { path });
        self.ctx.stats.record_skipped_file();
        continue;
      }

      for model in &models {
        self.ctx.imports.create_link(&model.name, &path)?;
      }
      self.ctx.stats.record_model_file(models.len());

      files.push(
        FileDescriptor::builder()
          .path(path)
          .template(template)
          .data(TemplateData::Model(ModelTemplateData {
            config: self.ctx.config.clone(),
            models,
            extensions: object.extensions.clone(),
            imports: vec![],
          }))
          .build(),
      );
    }

    Ok(files)
  }

  /// Generated records for one file: the model itself, or for query parameters the restructured
  /// root followed by its synthesized levels.
  fn build_models(&mut self, id: ModelId, object: &ObjectModel) -> Result<Vec<GeneratedModel>, GenerationError> {
    let defs = if object.origin == ModelOrigin::QueryParameters {
      let restructured = Restructurer::new(self.graph, self.ctx).restructure(id, object)?;
      self.ctx.storage.set_model(id, StorageEntry::mapped(restructured.mapping));
      self.ctx.stats.record_synthetic_models(restructured.objects.len() - 1);
      restructured.objects
    } else {
      vec![RestructuredObject {
        key: id,
        model: object.clone(),
      }]
    };

    let mut models = vec![];
    for def in defs {
      let generated = self.build_model(def.key, &def.model)?;
      models.push(generated);
    }
    Ok(models)
  }

  fn build_model(&mut self, key: ModelId, def: &ObjectModel) -> Result<GeneratedModel, GenerationError> {
    let name = match self.ctx.storage.model_name(key) {
      Some(name) => name.to_string(),
      None => self.ctx.naming.unique_model_name(def),
    };
    self.ctx.storage.set_model(key, StorageEntry::named(name.clone()));

    let mut resolver = TypeResolver::new(self.graph, self.ctx);

    let mut dependencies = vec![];
    let additional_type = match def.additional_properties {
      Some(additional) => {
        let type_name = resolver.resolve_type(additional)?;
        dependencies.extend(resolver.resolve_dependencies(additional)?);
        Some(type_name)
      }
      None => None,
    };

    let properties = def
      .properties
      .iter()
      .map(|property| build_property(&mut resolver, property))
      .collect::<Result<Vec<_>, _>>()?;

    let generated = GeneratedModel::builder()
      .name(name)
      .properties(properties)
      .maybe_addition_properties_type_name(additional_type)
      .deprecated(def.deprecated)
      .maybe_description(def.description.clone())
      .dependencies(dependencies)
      .build();

    self.ctx.storage.set_model(key, StorageEntry::generated(generated.clone()));
    Ok(generated)
  }
}

fn build_property(resolver: &mut TypeResolver<'_, '_>, property: &Property) -> Result<GeneratedProperty, GenerationError> {
  let type_name = resolver.resolve_property_type(property)?;
  let dependencies = resolver.resolve_dependencies(property.def)?;

  Ok(
    GeneratedProperty::builder()
      .name(property.name.as_str())
      .type_name(type_name)
      .required(property.required)
      .deprecated(property.deprecated)
      .maybe_description(property.description.clone())
      .extensions(property.extensions.clone())
      .dependencies(dependencies)
      .build(),
  )
}
