use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use serde::Serialize;
use ts_clientgen::{
  document::Document,
  generator::{
    GeneratedOutput, GenerationStats, GeneratorKind, Orchestrator, UserConfig, ast::FileDescriptor,
    orchestrator::DocumentMetadata,
  },
  utils::DocumentLoader,
};

use crate::ui::{Colors, GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub generator: GeneratorKind,
  pub input: PathBuf,
  pub output: PathBuf,
  pub config: Option<PathBuf>,
  pub verbose: bool,
  pub quiet: bool,
}

/// What lands in the output file.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
  generator: GeneratorKind,
  document: DocumentMetadata,
  files: &'a [FileDescriptor],
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      generator,
      input,
      output,
      config,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be combined");
    }

    Ok(Self {
      generator: generator.into(),
      input,
      output,
      config,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<Document> {
    DocumentLoader::open(&self.input).await?.parse()
  }

  async fn load_user_config(&self) -> anyhow::Result<Option<UserConfig>> {
    let Some(path) = &self.config else {
      return Ok(None);
    };
    let bytes = tokio::fs::read(path)
      .await
      .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_user_config(&bytes, path).map(Some)
  }

  async fn write_manifest(&self, metadata: DocumentMetadata, output: &GeneratedOutput) -> anyhow::Result<()> {
    let manifest = Manifest {
      generator: self.generator,
      document: metadata,
      files: &output.files,
    };
    let json = serde_json::to_string_pretty(&manifest)?;

    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, json)
      .await
      .with_context(|| format!("failed to write {}", self.output.display()))?;
    Ok(())
  }
}

/// Decodes a user config, naming the offending key on failure.
fn parse_user_config(bytes: &[u8], path: &Path) -> anyhow::Result<UserConfig> {
  let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
  serde_path_to_error::deserialize(deserializer).map_err(|error| {
    anyhow::anyhow!(
      "invalid config {} at '{}': {}",
      path.display(),
      error.path(),
      error.inner()
    )
  })
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, metadata: &DocumentMetadata) {
    let title = match (&metadata.title, &metadata.version) {
      (Some(title), Some(version)) => format!(" for {title} {version}"),
      (Some(title), None) => format!(" for {title}"),
      _ => String::new(),
    };
    self.info(
      &format!("Generating {} client{title}...", self.config.generator)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Files generated:", stats.files_generated.to_string());
    self.stat("", format!("{} enums", stats.enums_generated));
    self.stat(
      "",
      format!(
        "{} models in {} files, {} synthesized",
        stats.models_generated, stats.model_files_generated, stats.synthetic_models_generated
      ),
    );
    self.stat("", format!("{} services", stats.services_generated));
    self.stat("Operations converted:", stats.operations_converted.to_string());
    if stats.files_skipped > 0 {
      self.stat("Files inlined:", stats.files_skipped.to_string());
    }

    self.print_events(stats);
  }

  fn print_events(&self, stats: &GenerationStats) {
    if !self.config.verbose || stats.events.is_empty() {
      return;
    }

    println!();
    for event in &stats.events {
      println!(
        "              {} {}",
        "-".with(self.colors.accent()),
        event.to_string().with(self.colors.info())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing manifest to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {} client", self.config.generator).with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  let user_config = config.load_user_config().await?;
  let generator_config = config.generator.prepare_config(user_config.as_ref())?;

  logger.log_loading();
  let document = config.load_document().await?;

  let orchestrator = Orchestrator::new(&document, config.generator, generator_config);
  let metadata = orchestrator.metadata();
  logger.log_generating(&metadata);
  let output = orchestrator.generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_manifest(metadata, &output).await?;

  logger.log_success();
  Ok(())
}
