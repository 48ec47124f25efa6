use thiserror::Error;

use crate::document::{DocumentError, ModelId};

/// Fatal conditions that abort a generation run; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("duplicate model reference found for '{symbol}'")]
  DuplicateLink { symbol: String },
  #[error("dependency '{symbol}' could not be resolved")]
  UnresolvedDependency { symbol: String },
  #[error("no model was generated for '{model}'")]
  EmptyModelFile { model: String },
  #[error("model {id} is not part of the document")]
  UnknownModel { id: ModelId },
  #[error("invalid {generator} configuration: {message}")]
  InvalidConfig { generator: String, message: String },
  #[error(transparent)]
  Document(#[from] DocumentError),
}
