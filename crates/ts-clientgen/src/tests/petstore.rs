use crate::{
  fixtures::PETSTORE,
  generator::{
    GenerationEvent, GeneratorKind, Orchestrator,
    ast::{
      FileDescriptor, JsDocBuilder, ModelTemplateData, RequestVarNames, ServiceTemplateData, TemplateData,
      parametrize_url_pattern,
    },
    orchestrator::GeneratedOutput,
  },
  utils::DocumentLoader,
};

fn generate(kind: GeneratorKind) -> GeneratedOutput {
  let document = DocumentLoader::parse_slice(PETSTORE.as_bytes()).unwrap();
  let config = kind.prepare_config(None).unwrap();
  Orchestrator::new(&document, kind, config).generate().unwrap()
}

fn file<'a>(output: &'a GeneratedOutput, path: &str) -> &'a FileDescriptor {
  output
    .files
    .iter()
    .find(|file| file.path == path)
    .unwrap_or_else(|| panic!("missing file {path}"))
}

fn model_data<'a>(output: &'a GeneratedOutput, path: &str) -> &'a ModelTemplateData {
  let Some(TemplateData::Model(data)) = &file(output, path).data else {
    panic!("{path} is not a model file");
  };
  data
}

fn service_data<'a>(output: &'a GeneratedOutput, path: &str) -> &'a ServiceTemplateData {
  let Some(TemplateData::Service(data)) = &file(output, path).data else {
    panic!("{path} is not a service file");
  };
  data
}

#[test]
fn test_axios_file_set() {
  let output = generate(GeneratorKind::AxiosTypescript);

  let paths: Vec<&str> = output.files.iter().map(|file| file.path.as_str()).collect();
  assert_eq!(
    paths,
    [
      "enums/PetStatus.ts",
      "enums/Rating.ts",
      "models/Pet.ts",
      "models/Error.ts",
      "models/ListPetsQueryParameters.ts",
      "services/Pets.ts",
      "Common.ts",
      "index.ts",
      "internals.ts",
    ]
  );

  let Some(TemplateData::Index(index)) = &file(&output, "index.ts").data else {
    panic!("expected index data");
  };
  assert_eq!(index.paths.len(), 7);
  assert_eq!(index.paths[0], "./enums/PetStatus");
  assert_eq!(index.paths[6], "./Common");
}

#[test]
fn test_ng_file_names() {
  let output = generate(GeneratorKind::NgTypescript);

  let paths: Vec<&str> = output.files.iter().map(|file| file.path.as_str()).collect();
  assert_eq!(
    paths,
    [
      "enums/pet-status.ts",
      "enums/rating.ts",
      "models/pet.ts",
      "models/error.ts",
      "models/list-pets-query-parameters.ts",
      "services/pets.service.ts",
      "common.service.ts",
      "index.ts",
      "internals.ts",
    ]
  );
  assert_eq!(file(&output, "internals.ts").data, None);
}

#[test]
fn test_enums() {
  let output = generate(GeneratorKind::AxiosTypescript);

  let Some(TemplateData::Enum(status)) = &file(&output, "enums/PetStatus.ts").data else {
    panic!("expected enum data");
  };
  let names: Vec<&str> = status.model.entries.iter().map(|entry| entry.name.as_str()).collect();
  assert_eq!(names, ["Available", "Pending", "Sold"]);
  assert!(status.model.entries[2].deprecated);
  assert!(status.model.is_stringly_typed);

  let Some(TemplateData::Enum(rating)) = &file(&output, "enums/Rating.ts").data else {
    panic!("expected enum data");
  };
  let names: Vec<&str> = rating.model.entries.iter().map(|entry| entry.name.as_str()).collect();
  assert_eq!(names, ["_1", "_5"]);
  assert!(!rating.model.is_stringly_typed);
}

#[test]
fn test_pet_model_imports_its_enum() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let data = model_data(&output, "models/Pet.ts");

  let pet = &data.models[0];
  let types: Vec<(&str, &str)> = pet
    .properties
    .iter()
    .map(|property| (property.name.as_str(), property.type_name.as_str()))
    .collect();
  assert_eq!(
    types,
    [("id", "number"), ("name", "string"), ("status", "PetStatus"), ("tags", "Array<string>")]
  );
  assert_eq!(data.imports.len(), 1);
  assert_eq!(data.imports[0].keys, ["PetStatus"]);
  assert_eq!(data.imports[0].path, "../enums/PetStatus");
}

#[test]
fn test_query_model_file() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let data = model_data(&output, "models/ListPetsQueryParameters.ts");

  let names: Vec<&str> = data.models.iter().map(|model| model.name.as_str()).collect();
  assert_eq!(names, ["ListPetsQueryParameters", "ListPetsFilterQueryParameters"]);
  assert_eq!(data.imports.len(), 1, "sibling models are not imported");
  assert_eq!(data.imports[0].keys, ["PetStatus"]);
}

#[test]
fn test_pets_service() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let service = service_data(&output, "services/Pets.ts");

  assert_eq!(service.name, "Pets");
  assert_eq!(service.description.as_deref(), Some("Everything about pets"));
  assert_eq!(service.base_url.as_deref(), Some("https://petstore.example.com/v1"));

  let names: Vec<&str> = service.paths.iter().map(|path| path.name.as_str()).collect();
  assert_eq!(names, ["listPets", "createPets", "showPetById"]);

  let list = &service.paths[0];
  assert_eq!(list.response.type_name, "Array<Pet>");
  assert_eq!(list.response.media.as_deref(), Some("application/json"));
  let mapping: Vec<(&str, String)> = list
    .request
    .query_parameters_mapping
    .iter()
    .flatten()
    .map(|mapping| (mapping.original_name.as_str(), mapping.object_path.join(".")))
    .collect();
  assert_eq!(
    mapping,
    [
      ("limit", "limit".to_string()),
      ("Filter.Status", "filter.status".to_string()),
      ("Filter.Name", "filter.name".to_string()),
    ]
  );

  let create = &service.paths[1];
  let body = create.request.body.as_ref().expect("body");
  assert_eq!(body.type_name, "Pet");
  assert!(body.required);
  assert_eq!(create.response.type_name, "void");
  assert_eq!(create.security.len(), 1);

  let show = &service.paths[2];
  assert_eq!(
    show.request.path_parameters_type.as_ref().map(|model| model.name.as_str()),
    Some("ShowPetByIdPathParameters")
  );
  assert_eq!(show.response.description.as_deref(), Some("A pet for sale"));

  let imports: Vec<(&str, Vec<String>)> = service
    .imports
    .iter()
    .map(|entry| (entry.path.as_str(), entry.keys.clone()))
    .collect();
  assert_eq!(
    imports,
    [
      ("../models/ListPetsQueryParameters", vec!["ListPetsQueryParameters".to_string()]),
      ("../models/Pet", vec!["Pet".to_string()]),
    ]
  );
}

#[test]
fn test_common_service() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let service = service_data(&output, "Common.ts");

  assert_eq!(service.name, "Common");
  assert_eq!(service.description, None);
  let health = &service.paths[0];
  assert_eq!(health.name, "getHealth");
  assert!(health.deprecated);
  assert_eq!(health.response.type_name, "string");
  assert_eq!(health.response.media.as_deref(), Some("text/plain"));
  assert!(service.imports.is_empty());
}

#[test]
fn test_service_template_helpers() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let service = service_data(&output, "services/Pets.ts");
  let show = &service.paths[2];

  let vars = RequestVarNames {
    path_parameters: "pathParameters",
    query_parameters: "queryParameters",
    body: "body",
  };
  let jsdoc = JsDocBuilder::default().build(&service.jsdoc_config(show, vars, Some("Pet")), 1);
  assert_eq!(
    jsdoc,
    [
      "\t/**",
      "\t * @summary Info for a specific pet",
      "\t * @param {string} petId - The id of the pet to retrieve",
      "\t * @returns {Pet} A pet for sale",
      "\t */",
    ]
    .join("\n")
  );

  assert_eq!(parametrize_url_pattern(&show.url_pattern, None), "/pets/${petId}");
}

#[test]
fn test_stats_and_events() {
  let output = generate(GeneratorKind::AxiosTypescript);
  let stats = &output.stats;

  assert_eq!(stats.files_generated, 9);
  assert_eq!(stats.enums_generated, 2);
  assert_eq!(stats.models_generated, 4);
  assert_eq!(stats.model_files_generated, 3);
  assert_eq!(stats.synthetic_models_generated, 1);
  assert_eq!(stats.services_generated, 2);
  assert_eq!(stats.operations_converted, 4);
  assert_eq!(stats.files_skipped, 1);

  let rendered: Vec<String> = stats.events.iter().map(ToString::to_string).collect();
  assert!(rendered.contains(&"Creating model from 'listPets' (query parameters)".to_string()));
  assert!(rendered.contains(&"Ignore models/ShowPetByIdPathParameters (inline mode)".to_string()));
  assert!(stats.events.contains(&GenerationEvent::JsonResponseSelected {
    media: "application/json".to_string(),
    code: "200".to_string(),
  }));
}
