// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure, subcommands, and shared build options

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build::parse_debug_flag;

#[derive(Parser)]
#[command(name = "confgen")]
#[command(about = "Generate build configuration headers from @placeholder@ templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the configuration template into the destination directory
    Generate {
        #[command(flatten)]
        build: BuildArgs,

        #[arg(long, help = "Render the template without writing the output file")]
        dry_run: bool,
    },

    /// Print the variables that would be substituted
    Vars {
        #[command(flatten)]
        build: BuildArgs,

        #[arg(long, value_enum, default_value_t = VarsFormat::Text, help = "Output format")]
        format: VarsFormat,
    },
}

/// Build parameters shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    #[arg(long, default_value = "src", help = "Directory containing the template")]
    pub spath: PathBuf,

    #[arg(long, default_value = "build", help = "Directory receiving the generated file")]
    pub dpath: PathBuf,

    #[arg(
        long = "version",
        id = "project_version",
        default_value = "1.0.0",
        help = "Project version (major.minor.alter)"
    )]
    pub project_version: String,

    #[arg(long, default_value = "1.0.0", help = "Build version string")]
    pub build_version: String,

    #[arg(long, help = "Build timestamp")]
    pub build_time: Option<String>,

    #[arg(long, help = "Compiler identifier")]
    pub compiler: Option<String>,

    #[arg(
        long,
        default_value = "n",
        value_parser = parse_debug_flag,
        action = clap::ArgAction::Set,
        help = "Debug build (y/n)"
    )]
    pub debug: bool,

    #[arg(long, help = "Author recorded in the generated file")]
    pub author: Option<String>,

    #[arg(long, help = "Template file name inside the source directory")]
    pub template: Option<String>,

    #[arg(long, help = "Output file name inside the destination directory")]
    pub output: Option<String>,

    #[arg(long = "var", help = "Extra template variables (key=value)")]
    pub vars: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarsFormat {
    Text,
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            match var.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    variables.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(anyhow::anyhow!(
                        "Invalid variable format '{}'. Expected 'key=value'",
                        var
                    ));
                }
            }
        }

        Ok(variables)
    }
}
