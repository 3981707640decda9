// ABOUTME: Literal @placeholder@ substitution engine
// ABOUTME: Renders template text in a single pass and writes the buffered result to disk

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{Result, TemplateError};
use super::mapping::VariableMapping;

pub const DEFAULT_DELIMITER: char = '@';

/// Substitutes `@name@` placeholders with values from a [`VariableMapping`].
///
/// Matching is literal and case-sensitive. Placeholders with no matching
/// variable are kept as they are, and inserted values are never scanned
/// again, so a value that looks like a placeholder stays in the output.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine {
    delimiter: char,
}

/// Result of rendering template text in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub substitutions: usize,
    /// Distinct placeholder names that had no variable, in order of appearance
    pub unresolved: Vec<String>,
}

/// Result of rendering a template file to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub substitutions: usize,
    pub unresolved: Vec<String>,
}

impl TemplateEngine {
    /// Create an engine using the default `@` delimiter
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Substitute every known placeholder in `template`
    pub fn render_str(&self, template: &str, variables: &VariableMapping) -> Result<Rendered> {
        self.check_variables(variables)?;

        let delimiter = self.delimiter;
        let width = delimiter.len_utf8();
        let mut text = String::with_capacity(template.len());
        let mut substitutions = 0;
        let mut unresolved: Vec<String> = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find(delimiter) {
            text.push_str(&rest[..open]);
            let after_open = &rest[open + width..];

            let Some(close) = after_open.find(delimiter) else {
                text.push_str(&rest[open..]);
                rest = "";
                break;
            };

            let name = &after_open[..close];
            match variables.get(name) {
                Some(Some(value)) => {
                    text.push_str(value);
                    substitutions += 1;
                    rest = &after_open[close + width..];
                }
                _ => {
                    if is_identifier(name) && !unresolved.iter().any(|n| n == name) {
                        unresolved.push(name.to_string());
                    }
                    // The closing delimiter may open the next placeholder
                    text.push(delimiter);
                    rest = after_open;
                }
            }
        }
        text.push_str(rest);

        Ok(Rendered {
            text,
            substitutions,
            unresolved,
        })
    }

    /// Read a template file verbatim
    pub fn load_template(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TemplateError::TemplateNotFound {
                path: path.to_path_buf(),
            },
            _ => TemplateError::ReadFailed {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    /// Render `input` into `output`, overwriting it.
    ///
    /// The whole document is substituted before the output is opened, so an
    /// error leaves any existing output untouched.
    pub fn render_file(
        &self,
        input: &Path,
        output: &Path,
        variables: &VariableMapping,
    ) -> Result<RenderOutcome> {
        let template = self.load_template(input)?;
        debug!(
            "Loaded template {} ({} bytes)",
            input.display(),
            template.len()
        );

        let rendered = self.render_str(&template, variables)?;
        if !rendered.unresolved.is_empty() {
            debug!(
                "Leaving unresolved placeholders in place: {}",
                rendered.unresolved.join(", ")
            );
        }

        fs::write(output, &rendered.text).map_err(|source| TemplateError::WriteFailed {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            "Rendered {} -> {} ({} substitutions, {} bytes)",
            input.display(),
            output.display(),
            rendered.substitutions,
            rendered.text.len()
        );

        Ok(RenderOutcome {
            output_path: output.to_path_buf(),
            bytes_written: rendered.text.len(),
            substitutions: rendered.substitutions,
            unresolved: rendered.unresolved,
        })
    }

    fn check_variables(&self, variables: &VariableMapping) -> Result<()> {
        for (key, value) in variables.iter() {
            if key.is_empty() || key.contains(self.delimiter) {
                return Err(TemplateError::InvalidKey {
                    key: key.to_string(),
                    delimiter: self.delimiter,
                });
            }
            if value.is_none() {
                return Err(TemplateError::MissingValue {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `input` into `output` with the default `@` delimiter
pub fn render(input: &Path, output: &Path, variables: &VariableMapping) -> Result<RenderOutcome> {
    TemplateEngine::new().render_file(input, output, variables)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
