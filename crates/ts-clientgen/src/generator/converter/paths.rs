use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::{
  document::{ApiPath, Model, RequestBody, Response},
  generator::{
    GenerationError,
    ast::{
      FileDescriptor, GeneratedBody, GeneratedPath, GeneratedRequest, GeneratedResponse, ServiceTemplateData,
      TemplateData,
    },
    context::{GenerationContext, ModelGraph},
    converter::type_resolver::TypeResolver,
    metrics::GenerationEvent,
  },
  utils::paths,
};

pub const CONTROLLER_NAME_EXTENSION: &str = "x-controller-name";
const COMMON_SERVICE: &str = "common";

static JSON_MEDIA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^application/json$").unwrap());
static SUCCESS_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^2").unwrap());
static DEFAULT_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^default$").unwrap());

/// Where an operation is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceGroup<'a> {
  Named(&'a str),
  Common,
}

/// Groups operations into services: the `x-controller-name` extension wins, then every tag, and
/// whatever is left lands in the common service. Named groups keep first-seen order and come
/// before the common one.
pub fn group_paths(paths: &[ApiPath]) -> IndexMap<ServiceGroup<'_>, Vec<&ApiPath>> {
  let mut named: IndexMap<ServiceGroup<'_>, Vec<&ApiPath>> = IndexMap::new();
  let mut common = vec![];

  for path in paths {
    if let Some(controller) = path.string_extension(CONTROLLER_NAME_EXTENSION) {
      named.entry(ServiceGroup::Named(controller)).or_default().push(path);
    } else if let Some(tags) = path.tags.as_ref().filter(|tags| !tags.is_empty()) {
      for tag in tags {
        named.entry(ServiceGroup::Named(tag)).or_default().push(path);
      }
    } else {
      common.push(path);
    }
  }

  if !common.is_empty() {
    named.insert(ServiceGroup::Common, common);
  }
  named
}

/// Emits one service file per operation group.
pub struct PathConverter<'r, 'g> {
  graph: &'r ModelGraph<'g>,
  ctx: &'r mut GenerationContext,
}

impl<'r, 'g> PathConverter<'r, 'g> {
  pub fn new(graph: &'r ModelGraph<'g>, ctx: &'r mut GenerationContext) -> Self {
    Self { graph, ctx }
  }

  pub fn convert(&mut self) -> Result<Vec<FileDescriptor>, GenerationError> {
    let document = self.graph.document();
    let mut files = vec![];

    for (group, paths) in group_paths(&document.paths) {
      let (name, path, description) = match group {
        ServiceGroup::Named(group_name) => {
          self.ctx.event(GenerationEvent::CreatingService {
            name: group_name.to_string(),
          });
          let name = self.ctx.naming.unique_service_name(group_name);
          let file_name = self.ctx.layout.path_file_names.resolve(&name);
          let path = paths::join(self.ctx.layout.path_dir, &file_name);
          (name, path, document.tag_description(group_name).map(str::to_string))
        }
        ServiceGroup::Common => {
          self.ctx.event(GenerationEvent::CreatingCommonService);
          let name = self.ctx.naming.service_name(COMMON_SERVICE);
          (name, self.ctx.layout.path_file_names.resolve(COMMON_SERVICE), None)
        }
      };

      let generated = paths
        .into_iter()
        .map(|path| self.convert_path(&name, path))
        .collect::<Result<Vec<_>, _>>()?;
      self.ctx.stats.record_service(generated.len());

      files.push(
        FileDescriptor::builder()
          .path(path)
          .template(self.ctx.layout.path_template)
          .data(TemplateData::Service(ServiceTemplateData {
            config: self.ctx.config.clone(),
            name,
            description,
            base_url: document.base_url().map(str::to_string),
            paths: generated,
            imports: vec![],
          }))
          .build(),
      );
    }

    Ok(files)
  }

  fn convert_path(&mut self, service: &str, path: &ApiPath) -> Result<GeneratedPath, GenerationError> {
    self.ctx.event(GenerationEvent::AddingPath {
      url_pattern: path.url_pattern.clone(),
    });

    let name = self.ctx.naming.unique_operation_name(service, path);
    let request = self.request(path)?;
    let response = self.response(path)?;

    Ok(
      GeneratedPath::builder()
        .name(name)
        .url_pattern(path.url_pattern.clone())
        .method(path.method.clone())
        .maybe_operation_id(path.operation_id.clone())
        .request(request)
        .response(response)
        .deprecated(path.deprecated)
        .maybe_summaries(path.summaries.clone())
        .maybe_descriptions(path.descriptions.clone())
        .extensions(path.extensions.clone())
        .security(path.security.clone())
        .build(),
    )
  }

  fn request(&mut self, path: &ApiPath) -> Result<GeneratedRequest, GenerationError> {
    let storage = &self.ctx.storage;
    let path_parameters_type = path
      .request_path_parameters
      .and_then(|id| storage.model_entry(id))
      .and_then(|entry| entry.generated.clone());
    let query_entry = path.request_query_parameters.and_then(|id| storage.model_entry(id));
    let query_parameters_type = query_entry.and_then(|entry| entry.generated.clone());
    let query_parameters_mapping = query_entry.and_then(|entry| entry.mapping.clone());

    let body = match self.select_body(path) {
      Some(body) => {
        let mut resolver = TypeResolver::new(self.graph, self.ctx);
        let type_name = resolver.resolve_type(body.content)?;
        let dependencies = resolver.resolve_dependencies(body.content)?;
        Some(GeneratedBody {
          type_name,
          media: body.media.clone(),
          required: body.required.unwrap_or(false),
          description: body.description.clone(),
          dependencies,
        })
      }
      None => None,
    };

    Ok(GeneratedRequest {
      path_parameters_type,
      query_parameters_type,
      query_parameters_mapping,
      body,
    })
  }

  /// The JSON body when several are declared, else the first one.
  fn select_body<'p>(&mut self, path: &'p ApiPath) -> Option<&'p RequestBody> {
    let bodies = &path.request_bodies;

    if bodies.len() > 1
      && let Some(body) = bodies.iter().find(|body| JSON_MEDIA_RE.is_match(&body.media))
    {
      self.ctx.event(GenerationEvent::JsonRequestBodySelected {
        media: body.media.clone(),
      });
      return Some(body);
    }

    let body = bodies.first()?;
    if bodies.len() > 1 {
      self.ctx.event(GenerationEvent::FirstRequestBodySelected {
        media: body.media.clone(),
      });
    }
    Some(body)
  }

  fn response(&mut self, path: &ApiPath) -> Result<GeneratedResponse, GenerationError> {
    let selected = self
      .most_related_response(&path.responses, &SUCCESS_CODE_RE)
      .or_else(|| self.most_related_response(&path.responses, &DEFAULT_CODE_RE));

    let Some((content, media)) = selected.and_then(|response| response.content.map(|id| (id, response.media.clone())))
    else {
      return Ok(GeneratedResponse::void());
    };

    let graph = self.graph;
    let mut resolver = TypeResolver::new(graph, self.ctx);
    let dependencies = resolver.resolve_dependencies(content)?;
    let type_name = resolver.resolve_type(content)?;

    let description = match graph.get(content)? {
      model @ (Model::Object(_) | Model::Enum(_)) => model.description().map(str::to_string),
      _ => None,
    };

    Ok(GeneratedResponse {
      type_name,
      media,
      dependencies,
      description,
    })
  }

  /// Among several responses prefers a JSON one whose code matches; otherwise the first matching
  /// code.
  fn most_related_response<'p>(&mut self, responses: &'p [Response], code: &Regex) -> Option<&'p Response> {
    if responses.len() > 1
      && let Some(response) = responses.iter().find(|response| {
        code.is_match(&response.code) && response.media.as_deref().is_some_and(|media| JSON_MEDIA_RE.is_match(media))
      })
    {
      self.ctx.event(GenerationEvent::JsonResponseSelected {
        media: response.media.clone().unwrap_or_default(),
        code: response.code.clone(),
      });
      return Some(response);
    }

    let response = responses.iter().find(|response| code.is_match(&response.code))?;
    if responses.len() > 1 {
      self.ctx.event(GenerationEvent::FirstResponseSelected {
        media: response.media.clone().unwrap_or_default(),
      });
    }
    Some(response)
  }
}
