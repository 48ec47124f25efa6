pub mod identifiers;
pub mod service;

#[cfg(test)]
mod tests;

pub use service::{NamingScope, NamingService};
