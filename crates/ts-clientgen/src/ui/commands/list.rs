use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use ts_clientgen::{
  document::Document,
  generator::{GeneratorKind, Orchestrator, ast::TemplateData},
  utils::DocumentLoader,
};

use crate::ui::{Colors, GeneratorArg, colors::to_comfy, term_width};

/// One table row: service, operation, method, URL pattern.
type ServiceRow = (String, String, String, String);

/// Runs a full generation so the listed names are exactly the ones the flavor would emit.
fn service_rows(document: &Document, kind: GeneratorKind) -> anyhow::Result<Vec<ServiceRow>> {
  let config = kind.prepare_config(None)?;
  let output = Orchestrator::new(document, kind, config).generate()?;

  let rows = output
    .files
    .iter()
    .filter_map(|file| match &file.data {
      Some(TemplateData::Service(service)) => Some(service),
      _ => None,
    })
    .flat_map(|service| {
      service.paths.iter().map(|path| {
        (
          service.name.clone(),
          path.name.clone(),
          path.method.to_string(),
          path.url_pattern.clone(),
        )
      })
    })
    .collect();

  Ok(rows)
}

pub async fn list_services(input: &Path, generator: GeneratorArg, colors: &Colors) -> anyhow::Result<()> {
  let document = DocumentLoader::open(input).await?.parse()?;
  let rows = service_rows(&document, generator.into())?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["SERVICE", "OPERATION", "METHOD", "PATH"] {
    header.add_cell(Cell::new(title).fg(to_comfy(colors.label())));
  }
  table.set_header(header);

  for (service, operation, method, path) in rows {
    let mut row = Row::new();
    row.add_cell(Cell::new(service).fg(to_comfy(colors.info())));
    row.add_cell(
      Cell::new(operation)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(method)
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(to_comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
