pub mod ast;
pub mod config;
pub mod context;
pub mod conventions;
pub mod converter;
pub mod errors;
pub mod imports;
pub mod metrics;
pub mod naming;
pub mod orchestrator;
pub mod storage;


pub use config::{GeneratorConfig, GeneratorKind, UserConfig};
pub use conventions::{Conventions, DefaultConventions};
pub use errors::GenerationError;
pub use metrics::{GenerationEvent, GenerationStats};
pub use orchestrator::{GeneratedOutput, Orchestrator};
