pub mod document;
pub mod paths;

pub use document::DocumentLoader;
