mod common;
mod type_resolver;
