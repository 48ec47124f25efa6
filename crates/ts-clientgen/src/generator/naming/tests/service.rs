use http::Method;
use serde_json::json;

use crate::{
  document::{ApiPath, EnumModel, ModelOrigin, ObjectModel},
  generator::{
    conventions::{Conventions, DefaultConventions},
    naming::{NamingScope, NamingService},
  },
};

fn naming() -> NamingService {
  NamingService::new(Box::new(DefaultConventions))
}

#[test]
fn test_collisions_use_increasing_modifiers() {
  let mut naming = naming();
  let entity = ObjectModel::new("Test");

  assert_eq!(naming.unique_model_name(&entity), "Test");
  assert_eq!(naming.unique_model_name(&entity), "Test1");
  assert_eq!(naming.unique_model_name(&entity), "Test2");
}

#[test]
fn test_enums_and_models_share_scope() {
  let mut naming = naming();
  let enum_model = EnumModel {
    name: "Status".to_string(),
    ..EnumModel::default()
  };
  let object = ObjectModel::new("Status");

  assert_eq!(naming.unique_enum_name(&enum_model), "Status");
  assert_eq!(naming.unique_model_name(&object), "Status1");
  assert!(naming.is_reserved(&NamingScope::ReferenceEntity, "Status1"));
}

#[test]
fn test_origin_suffix_without_original_name() {
  let cases = [
    (ModelOrigin::PathParameters, "GetPetPathParameters"),
    (ModelOrigin::QueryParameters, "GetPetQueryParameters"),
    (ModelOrigin::FormData, "GetPetFormData"),
    (ModelOrigin::Body, "GetPetBody"),
    (ModelOrigin::Response, "GetPetResponse"),
    (ModelOrigin::None, "GetPet"),
  ];
  for (origin, expected) in cases {
    let mut naming = naming();
    let mut entity = ObjectModel::new("get pet");
    entity.origin = origin;
    assert_eq!(naming.unique_model_name(&entity), expected, "failed for origin {origin:?}");
  }
}

#[test]
fn test_original_name_suppresses_suffix() {
  let mut naming = naming();
  let mut entity = ObjectModel::new("Pet");
  entity.origin = ModelOrigin::Body;
  entity.original_name = Some("Pet".to_string());

  assert_eq!(naming.unique_model_name(&entity), "Pet");
  assert_eq!(naming.unique_model_name(&entity), "Pet1");
}

#[test]
fn test_property_scopes_are_independent() {
  let mut naming = naming();

  assert_eq!(naming.unique_property_name("1_Root@query-parameters", "Test"), "test");
  assert_eq!(naming.unique_property_name("1_Root@query-parameters", "Test"), "test1");
  assert_eq!(naming.unique_property_name("2_Other@query-parameters", "Test"), "test");
}

#[test]
fn test_service_names() {
  let mut naming = naming();

  assert_eq!(naming.unique_service_name("pets"), "Pets");
  assert_eq!(naming.unique_service_name("pets"), "Pets1");
  assert_eq!(naming.service_name("common"), "Common");
  assert_eq!(naming.service_name("common"), "Common", "formatting alone never reserves");
}

#[test]
fn test_operation_name_precedence() {
  let mut naming = naming();
  let plain = ApiPath::new("/pets/{petId}", Method::GET);

  assert_eq!(naming.unique_operation_name("Pets", &plain), "getPetsPetId");
  assert_eq!(naming.unique_operation_name("Pets", &plain), "getPetsPetId1");
  assert_eq!(naming.unique_operation_name("Store", &plain), "getPetsPetId");

  let mut with_id = ApiPath::new("/pets/{petId}", Method::GET);
  with_id.operation_id = Some("showPetById".to_string());
  assert_eq!(naming.unique_operation_name("Store", &with_id), "showPetById");

  let mut with_extension = with_id.clone();
  with_extension.extensions.insert("x-operation-name".to_string(), json!("greet"));
  assert_eq!(naming.unique_operation_name("Store", &with_extension), "greet");

  let mut non_string_extension = with_id;
  non_string_extension
    .extensions
    .insert("x-operation-name".to_string(), json!(true));
  assert_eq!(
    naming.unique_operation_name("Store", &non_string_extension),
    "showPetById1"
  );
}

struct Prefixed;

impl Conventions for Prefixed {
  fn model_name(&self, name: &str, modifier: Option<usize>, _suffix: Option<&str>) -> String {
    match modifier {
      Some(modifier) => format!("I{name}_{modifier}"),
      None => format!("I{name}"),
    }
  }
}

#[test]
fn test_custom_conventions() {
  let mut naming = NamingService::new(Box::new(Prefixed));
  let entity = ObjectModel::new("Pet");

  assert_eq!(naming.unique_model_name(&entity), "IPet");
  assert_eq!(naming.unique_model_name(&entity), "IPet_1");
  assert_eq!(naming.conventions().simple_type("integer", None).as_deref(), Some("number"));
}
