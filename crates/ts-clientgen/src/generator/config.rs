use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::generator::{errors::GenerationError, naming::identifiers};

/// Client flavor; flavors share the core and differ only in layout and config defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
  NgTypescript,
  AxiosTypescript,
  FetchTypescript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNameStyle {
  Pascal,
  Kebab,
  /// Kebab case with a `.service` suffix, for Angular services.
  KebabService,
}

impl FileNameStyle {
  pub fn resolve(self, name: &str) -> String {
    match self {
      Self::Pascal => identifiers::to_pascal_case(name),
      Self::Kebab => identifiers::to_kebab_case(name),
      Self::KebabService => format!("{}.service", identifiers::to_kebab_case(name)),
    }
  }
}

/// Directory, file-name policy and template id for each kind of emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
  pub enum_dir: &'static str,
  pub enum_file_names: FileNameStyle,
  pub enum_template: &'static str,
  pub model_dir: &'static str,
  pub model_file_names: FileNameStyle,
  pub model_template: &'static str,
  pub path_dir: &'static str,
  pub path_file_names: FileNameStyle,
  pub path_template: &'static str,
}

impl OutputLayout {
  const fn with_styles(entities: FileNameStyle, services: FileNameStyle) -> Self {
    Self {
      enum_dir: "enums",
      enum_file_names: entities,
      enum_template: "enum",
      model_dir: "models",
      model_file_names: entities,
      model_template: "model",
      path_dir: "services",
      path_file_names: services,
      path_template: "service",
    }
  }
}

/// User-supplied generator options, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserConfig {
  pub index: Option<bool>,
  pub inline_path_parameters: Option<bool>,
  pub readonly: Option<bool>,
  pub use_native_enums: Option<bool>,
  pub use_classes: Option<bool>,
}

/// Prepared options handed to every template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
  pub index: bool,
  pub inline_path_parameters: bool,
  pub readonly: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_native_enums: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_classes: Option<bool>,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      index: true,
      inline_path_parameters: true,
      readonly: true,
      use_native_enums: None,
      use_classes: None,
    }
  }
}

impl GeneratorKind {
  pub const fn layout(self) -> OutputLayout {
    match self {
      Self::NgTypescript => OutputLayout::with_styles(FileNameStyle::Kebab, FileNameStyle::KebabService),
      Self::AxiosTypescript | Self::FetchTypescript => {
        OutputLayout::with_styles(FileNameStyle::Pascal, FileNameStyle::Pascal)
      }
    }
  }

  /// Whether the flavor's `internals` template receives the document base URL.
  pub const fn internals_receive_base_url(self) -> bool {
    !matches!(self, Self::NgTypescript)
  }

  /// Applies the flavor defaults and rejects options the flavor does not understand.
  pub fn prepare_config(self, user: Option<&UserConfig>) -> Result<GeneratorConfig, GenerationError> {
    let user = user.cloned().unwrap_or_default();

    if self == Self::NgTypescript && user.use_classes.is_some() {
      return Err(GenerationError::InvalidConfig {
        generator: self.to_string(),
        message: "unknown option 'useClasses'".to_string(),
      });
    }

    Ok(GeneratorConfig {
      index: user.index.unwrap_or(true),
      inline_path_parameters: user.inline_path_parameters.unwrap_or(true),
      readonly: user.readonly.unwrap_or(true),
      use_native_enums: user.use_native_enums,
      use_classes: user.use_classes,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn test_generator_kind_names() {
    let names: Vec<String> = GeneratorKind::iter().map(|kind| kind.to_string()).collect();
    assert_eq!(names, ["ng-typescript", "axios-typescript", "fetch-typescript"]);
    assert_eq!(
      GeneratorKind::from_str("fetch-typescript"),
      Ok(GeneratorKind::FetchTypescript)
    );
  }

  #[test]
  fn test_file_name_styles() {
    let ng = GeneratorKind::NgTypescript.layout();
    assert_eq!(ng.model_file_names.resolve("PetCategory"), "pet-category");
    assert_eq!(ng.path_file_names.resolve("Pets"), "pets.service");

    let axios = GeneratorKind::AxiosTypescript.layout();
    assert_eq!(axios.enum_file_names.resolve("PetStatus"), "PetStatus");
    assert_eq!(axios.path_file_names.resolve("common"), "Common");
    assert_eq!(axios.model_dir, "models");
  }

  #[test]
  fn test_prepare_config_defaults() {
    let config = GeneratorKind::AxiosTypescript.prepare_config(None).unwrap();
    assert_eq!(config, GeneratorConfig::default());
  }

  #[test]
  fn test_prepare_config_passes_user_values() {
    let user = UserConfig {
      index: Some(false),
      inline_path_parameters: Some(false),
      use_native_enums: Some(true),
      use_classes: Some(true),
      ..UserConfig::default()
    };
    let config = GeneratorKind::FetchTypescript.prepare_config(Some(&user)).unwrap();

    assert!(!config.index);
    assert!(!config.inline_path_parameters);
    assert!(config.readonly);
    assert_eq!(config.use_native_enums, Some(true));
    assert_eq!(config.use_classes, Some(true));
  }

  #[test]
  fn test_ng_rejects_use_classes() {
    let user = UserConfig {
      use_classes: Some(true),
      ..UserConfig::default()
    };
    let error = GeneratorKind::NgTypescript.prepare_config(Some(&user)).unwrap_err();
    assert_eq!(
      error.to_string(),
      "invalid ng-typescript configuration: unknown option 'useClasses'"
    );
  }

  #[test]
  fn test_user_config_rejects_unknown_keys() {
    let result = serde_json::from_str::<UserConfig>(r#"{ "inlinePathParams": true }"#);
    assert!(result.is_err());
  }
}
