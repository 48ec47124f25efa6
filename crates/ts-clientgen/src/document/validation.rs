use thiserror::Error;

use super::{Document, Model, ModelId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
  #[error("{context} references unknown model {id}")]
  DanglingReference { context: String, id: ModelId },
  #[error("model {id} is part of a cycle that never passes through an object or enum")]
  DegenerateCycle { id: ModelId },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
  Pending,
  Active,
  Done,
}

impl Document {
  /// Checks that every handle is in range and that every cycle passes through a named model.
  ///
  /// Array and union/intersection nodes are transparent wrappers, so a cycle made only of them
  /// describes no finite type.
  pub fn validate(&self) -> Result<(), DocumentError> {
    self.validate_references()?;
    self.validate_cycles()
  }

  fn validate_references(&self) -> Result<(), DocumentError> {
    let check = |context: &dyn Fn() -> String, id: ModelId| {
      if id.0 < self.nodes.len() {
        Ok(())
      } else {
        Err(DocumentError::DanglingReference { context: context(), id })
      }
    };

    for (index, node) in self.nodes.iter().enumerate() {
      for id in node.references() {
        check(&|| format!("model {}", ModelId(index)), id)?;
      }
    }

    for &id in &self.models {
      check(&|| "document model list".to_string(), id)?;
    }

    for path in &self.paths {
      for id in path.references() {
        check(&|| format!("path {} {}", path.method, path.url_pattern), id)?;
      }
    }

    Ok(())
  }

  fn validate_cycles(&self) -> Result<(), DocumentError> {
    let mut state = vec![Visit::Pending; self.nodes.len()];

    for index in 0..self.nodes.len() {
      if state[index] == Visit::Pending && is_transparent(&self.nodes[index]) {
        self.visit_transparent(ModelId(index), &mut state)?;
      }
    }

    Ok(())
  }

  fn visit_transparent(&self, id: ModelId, state: &mut [Visit]) -> Result<(), DocumentError> {
    state[id.0] = Visit::Active;

    for next in self.nodes[id.0].references() {
      if !is_transparent(&self.nodes[next.0]) {
        continue;
      }
      match state[next.0] {
        Visit::Active => return Err(DocumentError::DegenerateCycle { id: next }),
        Visit::Pending => self.visit_transparent(next, state)?,
        Visit::Done => {}
      }
    }

    state[id.0] = Visit::Done;
    Ok(())
  }
}

fn is_transparent(model: &Model) -> bool {
  matches!(model, Model::Array(_) | Model::Extended(_))
}
