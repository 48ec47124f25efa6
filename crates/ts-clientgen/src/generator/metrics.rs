use std::fmt;

use strum::Display;

use crate::document::ModelOrigin;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub files_generated: usize,
  pub enums_generated: usize,
  pub models_generated: usize,
  pub model_files_generated: usize,
  pub synthetic_models_generated: usize,
  pub services_generated: usize,
  pub operations_converted: usize,
  pub files_skipped: usize,
  pub events: Vec<GenerationEvent>,
}

impl GenerationStats {
  pub fn record_enum(&mut self) {
    self.enums_generated += 1;
  }

  pub fn record_model_file(&mut self, models: usize) {
    self.model_files_generated += 1;
    self.models_generated += models;
  }

  pub fn record_synthetic_models(&mut self, count: usize) {
    self.synthetic_models_generated += count;
  }

  pub fn record_service(&mut self, operations: usize) {
    self.services_generated += 1;
    self.operations_converted += operations;
  }

  pub fn record_skipped_file(&mut self) {
    self.files_skipped += 1;
  }

  pub fn record_files(&mut self, count: usize) {
    self.files_generated = count;
  }

  pub fn record_event(&mut self, event: GenerationEvent) {
    self.events.push(event);
  }
}

/// Verbose progress notes collected while generating.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationEvent {
  #[strum(to_string = "Creating enum from '{name}'{origin}")]
  CreatingEnum { name: String, origin: OriginNote },
  #[strum(to_string = "Creating model from '{name}'{origin}")]
  CreatingModel { name: String, origin: OriginNote },
  #[strum(to_string = "Ignore {path} (inline mode)")]
  SkippedInlineModel { path: String },
  #[strum(to_string = "Creating service for '{name}'")]
  CreatingService { name: String },
  #[strum(to_string = "Creating common service")]
  CreatingCommonService,
  #[strum(to_string = "Adding path {url_pattern}")]
  AddingPath { url_pattern: String },
  #[strum(to_string = "Multiple request bodies found. Take '{media}'")]
  JsonRequestBodySelected { media: String },
  #[strum(to_string = "Multiple request bodies found. Take first ({media})")]
  FirstRequestBodySelected { media: String },
  #[strum(to_string = "Multiple responses found. Take '{media}' ({code})")]
  JsonResponseSelected { media: String, code: String },
  #[strum(to_string = "Multiple responses found. Take first ({media})")]
  FirstResponseSelected { media: String },
}

/// Renders ` (origin label)` for models with a known origin, nothing otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginNote(pub ModelOrigin);

impl fmt::Display for OriginNote {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0.label() {
      Some(label) => write!(f, " ({label})"),
      None => Ok(()),
    }
  }
}
