use serde_json::json;

use super::common::{create_context, object, simple, string_enum};
use crate::{
  document::{ArrayModel, Combinator, ConstantModel, Document, ExtendedModel, Model, Property, SimpleModel},
  generator::{
    GenerationError, GeneratorKind,
    context::ModelGraph,
    converter::{TypeResolver, type_resolver::UNKNOWN_TYPE},
  },
};

#[test]
fn test_simple_types() -> Result<(), GenerationError> {
  let cases = [
    ("integer", None, "number"),
    ("number", Some("double"), "number"),
    ("boolean", None, "boolean"),
    ("string", None, "string"),
    ("string", Some("date-time"), "string"),
    ("string", Some("binary"), "Blob"),
    ("file", None, "Blob"),
    ("object", None, UNKNOWN_TYPE),
  ];

  for (type_name, format, expected) in cases {
    let mut document = Document::default();
    let id = document.add_node(Model::Simple(SimpleModel {
      type_name: type_name.to_string(),
      format: format.map(str::to_string),
    }));
    let graph = ModelGraph::new(&document);
    let mut ctx = create_context(GeneratorKind::NgTypescript);

    let resolved = TypeResolver::new(&graph, &mut ctx).resolve_type(id)?;
    assert_eq!(resolved, expected, "failed for input {type_name:?} {format:?}");
  }
  Ok(())
}

#[test]
fn test_union_with_null_is_parenthesized() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let integer = document.add_node(simple("integer"));
  let null = document.add_node(Model::Null);
  let union = document.add_node(Model::Extended(ExtendedModel {
    combinator: Combinator::Or,
    members: vec![integer, null],
  }));
  let single = document.add_node(Model::Extended(ExtendedModel {
    combinator: Combinator::Or,
    members: vec![integer],
  }));
  let empty = document.add_node(Model::Extended(ExtendedModel {
    combinator: Combinator::And,
    members: vec![],
  }));

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  assert_eq!(resolver.resolve_type(union)?, "(number | null)");
  assert_eq!(resolver.resolve_type(single)?, "number");
  assert_eq!(resolver.resolve_type(empty)?, UNKNOWN_TYPE);
  Ok(())
}

#[test]
fn test_intersection_of_objects() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let base = document.add_node(Model::Object(object("Base", vec![])));
  let extra = document.add_node(Model::Object(object("Extra", vec![])));
  let both = document.add_node(Model::Extended(ExtendedModel {
    combinator: Combinator::And,
    members: vec![base, extra],
  }));

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  assert_eq!(resolver.resolve_type(both)?, "(Base & Extra)");
  assert_eq!(resolver.resolve_dependencies(both)?, vec!["Base", "Extra"]);
  Ok(())
}

#[test]
fn test_arrays_wrap_but_dependencies_do_not() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let pet = document.add_node(Model::Object(object("Pet", vec![])));
  let pets = document.add_node(Model::Array(ArrayModel { items: pet }));
  let nested = document.add_node(Model::Array(ArrayModel { items: pets }));

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  assert_eq!(resolver.resolve_type(pets)?, "Array<Pet>");
  assert_eq!(resolver.resolve_type(nested)?, "Array<Pet>");
  assert_eq!(resolver.resolve_dependencies(nested)?, vec!["Pet"]);
  Ok(())
}

#[test]
fn test_constants() -> Result<(), GenerationError> {
  let cases = [(json!("cat"), "'cat'"), (json!(5), "5"), (json!(true), "true")];

  for (value, expected) in cases {
    let mut document = Document::default();
    let id = document.add_node(Model::Constant(ConstantModel { value: value.clone() }));
    let graph = ModelGraph::new(&document);
    let mut ctx = create_context(GeneratorKind::NgTypescript);

    let resolved = TypeResolver::new(&graph, &mut ctx).resolve_type(id)?;
    assert_eq!(resolved, expected, "failed for input {value:?}");
  }
  Ok(())
}

#[test]
fn test_names_are_memoized_by_identity() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let first = document.add_node(Model::Object(object("Pet", vec![])));
  let second = document.add_node(Model::Object(object("Pet", vec![])));
  let status = document.add_node(Model::Enum(string_enum("Status", &["on"])));

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  assert_eq!(resolver.resolve_type(first)?, "Pet");
  assert_eq!(resolver.resolve_type(first)?, "Pet");
  assert_eq!(resolver.resolve_type(second)?, "Pet1");
  assert_eq!(resolver.resolve_dependencies(status)?, vec!["Status"]);

  assert_eq!(ctx.storage.model_name(first), Some("Pet"));
  assert_eq!(ctx.storage.model_name(second), Some("Pet1"));
  assert_eq!(ctx.storage.enum_name(status), Some("Status"));
  Ok(())
}

#[test]
fn test_self_reference_terminates() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let tree = document.add_node(Model::Object(object("Tree", vec![])));
  let children = document.add_node(Model::Array(ArrayModel { items: tree }));
  if let Model::Object(node) = &mut document.nodes[tree.0] {
    node.properties.push(Property::new("children", children));
  }

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  assert_eq!(resolver.resolve_type(children)?, "Array<Tree>");
  assert_eq!(resolver.resolve_dependencies(children)?, vec!["Tree"]);
  Ok(())
}

#[test]
fn test_scalars_have_no_dependencies() -> Result<(), GenerationError> {
  let mut document = Document::default();
  let text = document.add_node(simple("string"));
  let null = document.add_node(Model::Null);
  let unknown = document.add_node(Model::Unknown);

  let graph = ModelGraph::new(&document);
  let mut ctx = create_context(GeneratorKind::NgTypescript);
  let mut resolver = TypeResolver::new(&graph, &mut ctx);

  for id in [text, null, unknown] {
    assert!(resolver.resolve_dependencies(id)?.is_empty(), "failed for input {id}");
  }
  assert_eq!(resolver.resolve_type(unknown)?, UNKNOWN_TYPE);
  Ok(())
}
