// ABOUTME: Template substitution module for confgen
// ABOUTME: Provides the variable mapping and the @placeholder@ rendering engine

pub mod engine;
pub mod error;
pub mod mapping;

pub use engine::{render, RenderOutcome, Rendered, TemplateEngine, DEFAULT_DELIMITER};
pub use error::{Result, TemplateError};
pub use mapping::VariableMapping;
