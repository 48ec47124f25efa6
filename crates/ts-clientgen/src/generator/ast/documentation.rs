use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum::Display;

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocParam {
  pub name: String,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub type_name: Option<String>,
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocReturns {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub type_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocConfig {
  pub summary: Vec<String>,
  pub description: Vec<String>,
  pub params: Vec<JsDocParam>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub returns: Option<JsDocReturns>,
  pub deprecated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum JsDocTag {
  #[strum(to_string = "@deprecated")]
  Deprecated,
  #[strum(to_string = "@summary")]
  Summary,
  #[strum(to_string = "@description")]
  Description,
  #[strum(to_string = "@param")]
  Param,
  #[strum(to_string = "@returns")]
  Returns,
}

/// Tag sections in first-insertion order. A section with no content prints as the bare tag.
#[derive(Default)]
struct JsDocRecords {
  sections: Vec<(JsDocTag, Vec<String>)>,
}

impl JsDocRecords {
  fn set(&mut self, tag: JsDocTag, content: Option<String>) {
    let index = match self.sections.iter().position(|(existing, _)| *existing == tag) {
      Some(index) => index,
      None => {
        self.sections.push((tag, vec![]));
        self.sections.len() - 1
      }
    };

    if let Some(content) = content.filter(|content| !content.is_empty()) {
      self.sections[index].1.push(content);
    }
  }

  fn lines(&self) -> Vec<String> {
    self
      .sections
      .iter()
      .flat_map(|(tag, contents)| {
        if contents.is_empty() {
          vec![tag.to_string()]
        } else {
          contents.iter().map(|content| format!("{tag} {content}")).collect()
        }
      })
      .flat_map(|line| {
        LINE_BREAK_RE
          .split(&line)
          .map(str::trim)
          .filter(|part| !part.is_empty())
          .map(str::to_string)
          .collect::<Vec<_>>()
      })
      .collect()
  }
}

/// Renders comment blocks for generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDocBuilder {
  indentation: String,
}

impl Default for JsDocBuilder {
  fn default() -> Self {
    Self::new("\t")
  }
}

impl JsDocBuilder {
  pub fn new(indentation: impl Into<String>) -> Self {
    Self {
      indentation: indentation.into(),
    }
  }

  /// Returns `""` when there is nothing to document, a one-line `/** ... */` for a single line,
  /// and a ` * `-prefixed block otherwise.
  pub fn build(&self, config: &JsDocConfig, indent_level: usize) -> String {
    let mut records = JsDocRecords::default();

    if config.deprecated {
      records.set(JsDocTag::Deprecated, None);
    }
    for summary in &config.summary {
      records.set(JsDocTag::Summary, Some(summary.clone()));
    }
    for description in &config.description {
      records.set(JsDocTag::Description, Some(description.clone()));
    }
    for param in &config.params {
      records.set(JsDocTag::Param, Some(format_param(param)));
    }
    if let Some(returns) = &config.returns
      && let Some(text) = format_returns(returns)
    {
      records.set(JsDocTag::Returns, Some(text));
    }

    let indentation = self.indentation.repeat(indent_level);
    let lines = records.lines();

    match lines.as_slice() {
      [] => String::new(),
      [line] => format!("{indentation}/** {line} */"),
      lines => std::iter::once("/**".to_string())
        .chain(lines.iter().map(|line| format!(" * {line}")))
        .chain(std::iter::once(" */".to_string()))
        .map(|line| format!("{indentation}{line}"))
        .collect::<Vec<_>>()
        .join("\n"),
    }
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|value| !value.is_empty())
}

fn format_param(param: &JsDocParam) -> String {
  let name = if param.optional {
    format!("[{}]", param.name)
  } else {
    param.name.clone()
  };
  let type_name = non_empty(param.type_name.as_deref()).map(|type_name| format!("{{{type_name}}}"));
  let description = non_empty(param.description.as_deref()).map(|description| format!("- {description}"));

  [type_name, Some(name), description]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn format_returns(returns: &JsDocReturns) -> Option<String> {
  let type_name = non_empty(returns.type_name.as_deref()).map(|type_name| format!("{{{type_name}}}"));
  let description = non_empty(returns.description.as_deref()).map(str::to_string);

  if type_name.is_none() && description.is_none() {
    return None;
  }

  Some(
    [type_name, description]
      .into_iter()
      .flatten()
      .collect::<Vec<_>>()
      .join(" "),
  )
}
