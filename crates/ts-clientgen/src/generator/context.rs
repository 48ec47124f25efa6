use crate::{
  document::{Document, Model, ModelId},
  generator::{
    GenerationError,
    config::{GeneratorConfig, OutputLayout},
    conventions::Conventions,
    imports::ImportRegistry,
    metrics::{GenerationEvent, GenerationStats},
    naming::NamingService,
    storage::ModelStorage,
  },
};

/// The document arena plus nodes synthesized during the run.
///
/// Synthetic ids continue after the last document id, so one handle space covers both and the
/// caller-owned document is never mutated.
pub struct ModelGraph<'a> {
  document: &'a Document,
  synthetic: Vec<Model>,
}

impl<'a> ModelGraph<'a> {
  pub fn new(document: &'a Document) -> Self {
    Self {
      document,
      synthetic: vec![],
    }
  }

  pub fn document(&self) -> &'a Document {
    self.document
  }

  pub fn get(&self, id: ModelId) -> Result<&Model, GenerationError> {
    let base = self.document.nodes.len();
    let node = if id.0 < base {
      self.document.nodes.get(id.0)
    } else {
      self.synthetic.get(id.0 - base)
    };
    node.ok_or(GenerationError::UnknownModel { id })
  }

  pub fn push(&mut self, model: Model) -> ModelId {
    self.synthetic.push(model);
    ModelId(self.document.nodes.len() + self.synthetic.len() - 1)
  }

  /// Replaces a synthetic node; document nodes are read-only.
  pub fn replace(&mut self, id: ModelId, model: Model) -> Result<(), GenerationError> {
    let slot = id
      .0
      .checked_sub(self.document.nodes.len())
      .and_then(|index| self.synthetic.get_mut(index))
      .ok_or(GenerationError::UnknownModel { id })?;
    *slot = model;
    Ok(())
  }

  pub fn is_synthetic(&self, id: ModelId) -> bool {
    id.0 >= self.document.nodes.len()
  }

  pub fn synthetic_count(&self) -> usize {
    self.synthetic.len()
  }
}

/// Mutable state shared by every converter for the duration of one run.
pub struct GenerationContext {
  pub naming: NamingService,
  pub storage: ModelStorage,
  pub imports: ImportRegistry,
  pub stats: GenerationStats,
  pub config: GeneratorConfig,
  pub layout: OutputLayout,
  restructure_counter: usize,
}

impl GenerationContext {
  pub fn new(conventions: Box<dyn Conventions>, config: GeneratorConfig, layout: OutputLayout) -> Self {
    Self {
      naming: NamingService::new(conventions),
      storage: ModelStorage::new(),
      imports: ImportRegistry::new(),
      stats: GenerationStats::default(),
      config,
      layout,
      restructure_counter: 0,
    }
  }

  /// Unique key for the property naming scope of one restructured object.
  pub fn next_restructure_key(&mut self, name: &str, origin: impl std::fmt::Display) -> String {
    self.restructure_counter += 1;
    format!("{}_{name}@{origin}", self.restructure_counter)
  }

  pub fn event(&mut self, event: GenerationEvent) {
    self.stats.record_event(event);
  }
}
