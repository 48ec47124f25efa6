use std::sync::LazyLock;

use bon::Builder;
use regex::{Captures, Regex};
use serde::Serialize;

use super::{GeneratedEnum, GeneratedModel, GeneratedPath, JsDocConfig, JsDocParam, JsDocReturns};
use crate::{
  document::Extensions,
  generator::{config::GeneratorConfig, imports::ImportEntry},
  utils::paths,
};

static URL_PARAMETER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// One output file: where it goes, which template renders it, and what the template receives.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct FileDescriptor {
  #[builder(into)]
  pub path: String,
  #[builder(into)]
  pub template: String,
  #[serde(rename = "templateData", skip_serializing_if = "Option::is_none")]
  pub data: Option<TemplateData>,
}

impl FileDescriptor {
  /// Module specifier for `target` as imported from this file.
  pub fn relative_to(&self, target: &str) -> String {
    paths::import_path(&self.path, target)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TemplateData {
  Enum(EnumTemplateData),
  Model(ModelTemplateData),
  Service(ServiceTemplateData),
  Index(IndexTemplateData),
  Internals(InternalsTemplateData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumTemplateData {
  pub config: GeneratorConfig,
  pub model: GeneratedEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelTemplateData {
  pub config: GeneratorConfig,
  pub models: Vec<GeneratedModel>,
  pub extensions: Extensions,
  /// Filled once every file of the run is known.
  pub imports: Vec<ImportEntry>,
}

impl ModelTemplateData {
  pub fn dependencies(&self) -> Vec<&str> {
    self.models.iter().flat_map(GeneratedModel::all_dependencies).collect()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTemplateData {
  pub config: GeneratorConfig,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub base_url: Option<String>,
  pub paths: Vec<GeneratedPath>,
  /// Filled once every file of the run is known.
  pub imports: Vec<ImportEntry>,
}

/// Variable names a service template uses for the request arguments of an operation.
#[derive(Debug, Clone, Copy)]
pub struct RequestVarNames<'a> {
  pub path_parameters: &'a str,
  pub query_parameters: &'a str,
  pub body: &'a str,
}

impl ServiceTemplateData {
  /// Symbols the service file imports.
  ///
  /// Inlined path parameters contribute the dependencies of their properties instead of their
  /// own type, since the type itself is never emitted.
  pub fn dependencies(&self) -> Vec<&str> {
    let mut dependencies = vec![];

    for path in &self.paths {
      if let Some(path_parameters) = &path.request.path_parameters_type {
        if self.config.inline_path_parameters {
          dependencies.extend(path_parameters.all_dependencies());
        } else {
          dependencies.push(path_parameters.name.as_str());
        }
      }
      if let Some(query_parameters) = &path.request.query_parameters_type {
        dependencies.push(query_parameters.name.as_str());
      }
      if let Some(body) = &path.request.body {
        dependencies.extend(body.dependencies.iter().map(String::as_str));
      }
      dependencies.extend(path.response.dependencies.iter().map(String::as_str));
    }

    dependencies
  }

  pub fn jsdoc_config(
    &self,
    path: &GeneratedPath,
    vars: RequestVarNames<'_>,
    response_type_name: Option<&str>,
  ) -> JsDocConfig {
    let mut params = vec![];

    if let Some(path_parameters) = &path.request.path_parameters_type {
      if self.config.inline_path_parameters {
        params.extend(path_parameters.properties.iter().map(|property| JsDocParam {
          name: property.name.clone(),
          type_name: Some(property.type_name.clone()),
          optional: !property.required,
          description: property.description.clone(),
        }));
      } else {
        params.push(JsDocParam {
          name: vars.path_parameters.to_string(),
          type_name: Some(path_parameters.name.clone()),
          ..JsDocParam::default()
        });
      }
    }

    if let Some(query_parameters) = &path.request.query_parameters_type {
      params.push(JsDocParam {
        name: vars.query_parameters.to_string(),
        type_name: Some(query_parameters.name.clone()),
        ..JsDocParam::default()
      });
    }

    if let Some(body) = &path.request.body {
      params.push(JsDocParam {
        name: vars.body.to_string(),
        type_name: Some(body.type_name.clone()),
        optional: false,
        description: body.description.clone(),
      });
    }

    JsDocConfig {
      summary: path.summaries.clone().unwrap_or_default(),
      description: path.descriptions.clone().unwrap_or_default(),
      params,
      returns: Some(JsDocReturns {
        type_name: response_type_name.map(str::to_string),
        description: path.response.description.clone(),
      }),
      deprecated: path.deprecated,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexTemplateData {
  pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalsTemplateData {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub base_url: Option<String>,
}

/// Turns `/pets/{petId}` into a template literal body: `/pets/${petId}`, or `/pets/${params.petId}`
/// when the parameters travel as one object.
pub fn parametrize_url_pattern(url_pattern: &str, object: Option<&str>) -> String {
  URL_PARAMETER_RE
    .replace_all(url_pattern, |captures: &Captures<'_>| match object {
      Some(object) => format!("${{{object}.{}}}", &captures[1]),
      None => format!("${{{}}}", &captures[1]),
    })
    .into_owned()
}
