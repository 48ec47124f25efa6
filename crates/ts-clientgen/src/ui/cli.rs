use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ts_clientgen::generator::GeneratorKind;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "ts-clientgen")]
#[command(author, version, about = "Normalized API document to TypeScript client file manifest")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a normalized API document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate the file manifest for a TypeScript client
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Client flavor to generate
  #[arg(short, long, value_enum, default_value = "axios-typescript")]
  pub generator: GeneratorArg,

  /// Path to the normalized JSON document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the JSON file manifest will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Optional JSON generator config (index, inlinePathParameters, readonly, ...)
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Enable verbose output with every generation event
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorArg {
  NgTypescript,
  AxiosTypescript,
  FetchTypescript,
}

impl From<GeneratorArg> for GeneratorKind {
  fn from(value: GeneratorArg) -> Self {
    match value {
      GeneratorArg::NgTypescript => Self::NgTypescript,
      GeneratorArg::AxiosTypescript => Self::AxiosTypescript,
      GeneratorArg::FetchTypescript => Self::FetchTypescript,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the services and operations a flavor would generate
  Services {
    /// Path to the normalized JSON document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Client flavor whose naming rules apply
    #[arg(short, long, value_enum, default_value = "axios-typescript")]
    generator: GeneratorArg,
  },
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_generate() {
    let cli = Cli::parse_from([
      "ts-clientgen",
      "generate",
      "-g",
      "ng-typescript",
      "-i",
      "api.json",
      "-o",
      "out/manifest.json",
      "--verbose",
    ]);

    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(GeneratorKind::from(command.generator), GeneratorKind::NgTypescript);
    assert_eq!(command.output, PathBuf::from("out/manifest.json"));
    assert_eq!(command.config, None);
    assert!(command.verbose);
    assert!(!command.quiet);
  }

  #[test]
  fn test_generator_args_match_kinds() {
    let cases = [
      ("ng-typescript", GeneratorKind::NgTypescript),
      ("axios-typescript", GeneratorKind::AxiosTypescript),
      ("fetch-typescript", GeneratorKind::FetchTypescript),
    ];

    for (input, expected) in cases {
      let arg = GeneratorArg::from_str(input, false).unwrap();
      assert_eq!(GeneratorKind::from(arg), expected, "failed for input {input:?}");
      assert_eq!(expected.to_string(), input, "failed for input {input:?}");
    }
  }
}
