// ABOUTME: Main application orchestration for confgen CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create an application with configuration loaded from `path` or the default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(Config::load(path)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // stderr keeps `vars` output on stdout machine-readable
        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting confgen v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        // Command line variables take precedence over configured ones
        match &args.command {
            Commands::Generate { build, .. } | Commands::Vars { build, .. } => {
                let variables = Args::parse_variables(&build.vars)?;
                self.config.merge_variables(variables);
            }
        }

        match args.command {
            Commands::Generate { build, dry_run } => {
                commands::generate(build, dry_run, &self.config)
            }
            Commands::Vars { build, format } => {
                commands::show_variables(build, format, &self.config)
            }
        }
    }
}
