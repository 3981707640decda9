// ABOUTME: Command implementations for the confgen CLI
// ABOUTME: Handles execution of the generate and vars commands

use anyhow::Result;
use tracing::{info, warn};

use super::args::{BuildArgs, VarsFormat};
use super::config::Config;
use crate::build::{BuildOptions, PlatformInfo};
use crate::template::{TemplateEngine, VariableMapping};

/// Render the configuration template to the destination directory
pub fn generate(build: BuildArgs, dry_run: bool, config: &Config) -> Result<()> {
    let options = build_options(build, config);
    let variables = assemble_variables(&options)?;

    let engine = TemplateEngine::with_delimiter(config.delimiter);
    let input = options.template_path();
    let output = options.output_path();
    info!(
        "Generating {} from {} (delimiter '{}')",
        output.display(),
        input.display(),
        engine.delimiter()
    );

    if dry_run {
        let template = engine.load_template(&input)?;
        let rendered = engine.render_str(&template, &variables)?;

        info!("Dry run - output file not written");
        println!("✓ Template '{}' renders cleanly", input.display());
        println!("  Output: {} (not written)", output.display());
        println!("  Substitutions: {}", rendered.substitutions);
        print_unresolved(&rendered.unresolved);
        return Ok(());
    }

    let outcome = engine
        .render_file(&input, &output, &variables)
        .map_err(|e| anyhow::anyhow!("Configuration generation failed: {}", e))?;

    println!(
        "Generated {} ({} substitutions, {} bytes)",
        outcome.output_path.display(),
        outcome.substitutions,
        outcome.bytes_written
    );
    print_unresolved(&outcome.unresolved);

    Ok(())
}

/// Print the assembled variables without touching any template
pub fn show_variables(build: BuildArgs, format: VarsFormat, config: &Config) -> Result<()> {
    let options = build_options(build, config);
    let variables = assemble_variables(&options)?;

    match format {
        VarsFormat::Json => {
            let json = variables
                .to_json()
                .and_then(|value| serde_json::to_string_pretty(&value))
                .map_err(|e| anyhow::anyhow!("Failed to serialize variables to JSON: {}", e))?;
            println!("{}", json);
        }
        VarsFormat::Text => {
            let width = variables.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, value) in variables.iter() {
                println!("{:width$} = {}", key, value.unwrap_or("<unset>"), width = width);
            }
        }
    }

    Ok(())
}

/// Combine command line build arguments with configuration defaults
fn build_options(build: BuildArgs, config: &Config) -> BuildOptions {
    BuildOptions {
        source_dir: build.spath,
        dest_dir: build.dpath,
        template_name: build.template.unwrap_or_else(|| config.template.clone()),
        output_name: build.output.unwrap_or_else(|| config.output.clone()),
        version: build.project_version,
        build_version: build.build_version,
        build_time: build.build_time,
        compiler: build.compiler,
        debug: build.debug,
        author: build.author.or_else(|| config.author.clone()),
        extra_vars: config.template_vars.clone(),
    }
}

fn assemble_variables(options: &BuildOptions) -> Result<VariableMapping> {
    let platform = PlatformInfo::collect()?;
    let variables = options.variables(&platform)?;
    info!("Assembled {} template variables", variables.len());
    Ok(variables)
}

fn print_unresolved(unresolved: &[String]) {
    if !unresolved.is_empty() {
        warn!("Template has placeholders without variables");
        println!("  Unresolved placeholders: {}", unresolved.join(", "));
    }
}
