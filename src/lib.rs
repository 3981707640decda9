// ABOUTME: Main library module for the confgen configuration generator
// ABOUTME: Exports all core modules and provides the public API

pub mod build;
pub mod cli;
pub mod template;

// Re-export commonly used types
pub use build::{BuildOptions, PlatformInfo, Version};
pub use cli::{App, Args, Config};
pub use template::{render, TemplateEngine, TemplateError, VariableMapping};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
