//! Top-level driver for one generation run.
//!
//! ```no_run
//! use ts_clientgen::{
//!   generator::{GeneratorKind, Orchestrator},
//!   utils::DocumentLoader,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let document = DocumentLoader::open("api.json".as_ref()).await?.parse()?;
//! let kind = GeneratorKind::AxiosTypescript;
//! let config = kind.prepare_config(None)?;
//!
//! let output = Orchestrator::new(&document, kind, config).generate()?;
//! println!("{} files, {} operations", output.files.len(), output.stats.operations_converted);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::{
  document::{Document, Model},
  generator::{
    GenerationError,
    ast::{FileDescriptor, IndexTemplateData, InternalsTemplateData, TemplateData},
    config::{GeneratorConfig, GeneratorKind},
    context::{GenerationContext, ModelGraph},
    conventions::{Conventions, DefaultConventions},
    converter::{EnumConverter, ModelConverter, PathConverter, select_models},
    imports::ImportRegistry,
    metrics::GenerationStats,
  },
};

const INDEX_PATH: &str = "index";
const INDEX_TEMPLATE: &str = "index";
const INTERNALS_PATH: &str = "internals.ts";
const INTERNALS_TEMPLATE: &str = "internals";
const SOURCE_EXTENSION: &str = ".ts";

/// Every file of a run plus what happened while producing them.
#[derive(Debug)]
pub struct GeneratedOutput {
  pub files: Vec<FileDescriptor>,
  pub stats: GenerationStats,
}

/// Document title and version, for report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
  pub title: Option<String>,
  pub version: Option<String>,
}

pub struct Orchestrator<'a> {
  document: &'a Document,
  kind: GeneratorKind,
  config: GeneratorConfig,
  conventions: Box<dyn Conventions>,
}

impl<'a> Orchestrator<'a> {
  pub fn new(document: &'a Document, kind: GeneratorKind, config: GeneratorConfig) -> Self {
    Self {
      document,
      kind,
      config,
      conventions: Box::new(DefaultConventions),
    }
  }

  /// Replaces the default naming and scalar-type hooks.
  #[must_use]
  pub fn with_conventions(mut self, conventions: impl Conventions + 'static) -> Self {
    self.conventions = Box::new(conventions);
    self
  }

  pub fn metadata(&self) -> DocumentMetadata {
    DocumentMetadata {
      title: self.document.info.title.clone(),
      version: self.document.info.version.clone(),
    }
  }

  /// Runs enums, object models and services in that order, then wires imports and appends the
  /// index and internals files. Any failure aborts the whole run.
  pub fn generate(self) -> Result<GeneratedOutput, GenerationError> {
    self.document.validate()?;

    let mut ctx = GenerationContext::new(self.conventions, self.config, self.kind.layout());
    let mut graph = ModelGraph::new(self.document);

    let enums = select_models(self.document, |model| matches!(model, Model::Enum(_)));
    let objects = select_models(self.document, |model| matches!(model, Model::Object(_)));

    let mut files = EnumConverter::new(&graph, &mut ctx).convert(&enums)?;
    files.extend(ModelConverter::new(&mut graph, &mut ctx).convert(&objects)?);
    files.extend(PathConverter::new(&graph, &mut ctx).convert()?);

    attach_imports(&mut files, &ctx.imports)?;

    if ctx.config.index {
      let paths = files.iter().map(|file| format!("./{}", file.path)).collect();
      files.push(
        FileDescriptor::builder()
          .path(INDEX_PATH)
          .template(INDEX_TEMPLATE)
          .data(TemplateData::Index(IndexTemplateData { paths }))
          .build(),
      );
    }

    for file in &mut files {
      file.path.push_str(SOURCE_EXTENSION);
    }

    let internals = self
      .kind
      .internals_receive_base_url()
      .then(|| {
        TemplateData::Internals(InternalsTemplateData {
          base_url: self.document.base_url().map(str::to_string),
        })
      });
    files.push(
      FileDescriptor::builder()
        .path(INTERNALS_PATH)
        .template(INTERNALS_TEMPLATE)
        .maybe_data(internals)
        .build(),
    );

    ctx.stats.record_files(files.len());

    Ok(GeneratedOutput { files, stats: ctx.stats })
  }
}

/// Fills the import lists of model and service files. Runs after every converter so each symbol
/// already has its defining file.
fn attach_imports(files: &mut [FileDescriptor], registry: &ImportRegistry) -> Result<(), GenerationError> {
  for file in files {
    match &mut file.data {
      Some(TemplateData::Model(data)) => {
        let imports = registry.import_entries(&data.dependencies(), &file.path)?;
        data.imports = imports;
      }
      Some(TemplateData::Service(data)) => {
        let imports = registry.import_entries(&data.dependencies(), &file.path)?;
        data.imports = imports;
      }
      _ => {}
    }
  }
  Ok(())
}
