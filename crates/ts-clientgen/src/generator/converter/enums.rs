use crate::{
  document::{EnumEntry, EnumModel, ModelId},
  generator::{
    GenerationError,
    ast::{EnumTemplateData, FileDescriptor, GeneratedEnum, GeneratedEnumEntry, TemplateData},
    context::{GenerationContext, ModelGraph},
    metrics::{GenerationEvent, OriginNote},
    naming::identifiers::to_pascal_case,
    storage::StorageEntry,
  },
  utils::paths,
};

/// Emits one file per enum model.
pub struct EnumConverter<'r, 'g> {
  graph: &'r ModelGraph<'g>,
  ctx: &'r mut GenerationContext,
}

impl<'r, 'g> EnumConverter<'r, 'g> {
  pub fn new(graph: &'r ModelGraph<'g>, ctx: &'r mut GenerationContext) -> Self {
    Self { graph, ctx }
  }

  pub fn convert(&mut self, enums: &[ModelId]) -> Result<Vec<FileDescriptor>, GenerationError> {
    let graph = self.graph;
    let mut files = vec![];

    for &id in enums {
      let Some(model) = graph.get(id)?.as_enum() else {
        continue;
      };

      self.ctx.event(GenerationEvent::CreatingEnum {
        name: model.name.clone(),
        origin: OriginNote(model.origin),
      });

      let entries = model
        .entries
        .iter()
        .map(|entry| GeneratedEnumEntry {
          name: entry_name(model, entry),
          value: entry.value.clone(),
          deprecated: entry.deprecated,
          description: entry.description.clone(),
          extensions: entry.extensions.clone(),
        })
        .collect();

      let name = match self.ctx.storage.enum_name(id) {
        Some(name) => name.to_string(),
        None => self.ctx.naming.unique_enum_name(model),
      };
      self.ctx.storage.set_enum(id, StorageEntry::named(name.clone()));

      let generated = GeneratedEnum {
        name,
        is_stringly_typed: model.type_name == "string",
        entries,
        deprecated: model.deprecated,
        description: model.description.clone(),
        extensions: model.extensions.clone(),
      };

      let layout = &self.ctx.layout;
      let path = paths::join(layout.enum_dir, &layout.enum_file_names.resolve(&generated.name));
      let template = layout.enum_template;

      self.ctx.imports.create_link(&generated.name, &path)?;
      self.ctx.storage.set_enum(id, StorageEntry::generated(generated.clone()));
      self.ctx.stats.record_enum();

      files.push(
        FileDescriptor::builder()
          .path(path)
          .template(template)
          .data(TemplateData::Enum(EnumTemplateData {
            config: self.ctx.config.clone(),
            model: generated,
          }))
          .build(),
      );
    }

    Ok(files)
  }
}

/// Entries named after their own value get an identifier-safe name: `_1` for numeric enums,
/// PascalCase for string enums.
fn entry_name(model: &EnumModel, entry: &EnumEntry) -> String {
  if entry.name != entry.value_text() {
    return entry.name.clone();
  }

  if model.type_name == "string" {
    to_pascal_case(&entry.name)
  } else {
    format!("_{}", entry.name)
  }
}
