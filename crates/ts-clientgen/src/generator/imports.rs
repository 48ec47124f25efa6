use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::{generator::errors::GenerationError, utils::paths};

/// One import statement: symbols pulled from a single module path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEntry {
  pub keys: Vec<String>,
  pub path: String,
}

/// Global symbol to defining-file map for one run.
#[derive(Debug, Default)]
pub struct ImportRegistry {
  links: HashMap<String, String>,
}

impl ImportRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn create_link(&mut self, symbol: &str, file_path: &str) -> Result<(), GenerationError> {
    if self.links.contains_key(symbol) {
      return Err(GenerationError::DuplicateLink {
        symbol: symbol.to_string(),
      });
    }
    self.links.insert(symbol.to_string(), file_path.to_string());
    Ok(())
  }

  pub fn link(&self, symbol: &str) -> Option<&str> {
    self.links.get(symbol).map(String::as_str)
  }

  /// Groups `symbols` by defining file, in first-appearance order, relative to `current_file`.
  /// Symbols defined in `current_file` itself are skipped.
  pub fn import_entries<S: AsRef<str>>(
    &self,
    symbols: &[S],
    current_file: &str,
  ) -> Result<Vec<ImportEntry>, GenerationError> {
    let mut by_file: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for symbol in symbols {
      let symbol = symbol.as_ref();
      let file = self
        .link(symbol)
        .ok_or_else(|| GenerationError::UnresolvedDependency {
          symbol: symbol.to_string(),
        })?;
      by_file.entry(file).or_default().push(symbol);
    }

    Ok(
      by_file
        .into_iter()
        .filter(|(file, _)| *file != current_file)
        .map(|(file, keys)| ImportEntry {
          keys: keys.into_iter().unique().map(str::to_string).collect(),
          path: paths::import_path(current_file, file),
        })
        .collect(),
    )
  }
}
