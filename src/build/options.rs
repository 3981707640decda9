// ABOUTME: Build options that drive a single configuration-file generation
// ABOUTME: Turns version, mode, compiler, and platform facts into template variables

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use super::error::{BuildError, Result};
use super::platform::PlatformInfo;
use super::version::Version;
use crate::template::VariableMapping;

pub const DEFAULT_TEMPLATE_NAME: &str = "configure.h.in";
pub const DEFAULT_OUTPUT_NAME: &str = "configure.h";

/// Everything one invocation needs to generate a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub template_name: String,
    pub output_name: String,
    pub version: String,
    pub build_version: String,
    pub build_time: Option<String>,
    pub compiler: Option<String>,
    pub debug: bool,
    pub author: Option<String>,
    pub extra_vars: HashMap<String, String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            dest_dir: PathBuf::from("build"),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            version: "1.0.0".to_string(),
            build_version: "1.0.0".to_string(),
            build_time: None,
            compiler: None,
            debug: false,
            author: None,
            extra_vars: HashMap::new(),
        }
    }
}

impl BuildOptions {
    pub fn template_path(&self) -> PathBuf {
        self.source_dir.join(&self.template_name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.dest_dir.join(&self.output_name)
    }

    /// Assemble the variable mapping for this build.
    ///
    /// Build time and compiler stay unset when not supplied, which makes
    /// rendering fail with the variable name rather than emit an empty value.
    pub fn variables(&self, platform: &PlatformInfo) -> Result<VariableMapping> {
        let version: Version = self.version.parse()?;

        let mut vars = VariableMapping::new()
            .with("version", self.version.as_str())
            .with("version_major", version.major.to_string())
            .with("version_minor", version.minor.to_string())
            .with("version_alter", version.alter.to_string())
            .with("version_build", self.build_version.as_str());
        vars.insert_optional("build_time", self.build_time.clone());
        vars.insert("mode", if self.debug { "debug" } else { "release" });
        vars.insert("debug", if self.debug { "1" } else { "0" });
        if let Some(author) = &self.author {
            vars.insert("author", author.as_str());
            // Spelling used by existing configure.h.in templates
            vars.insert("aru_athor", author.as_str());
        }
        for (key, value) in platform.entries() {
            vars.insert(key, value);
        }
        vars.insert_optional("compiler", self.compiler.clone());

        if !self.extra_vars.is_empty() {
            debug!("Applying {} extra variables", self.extra_vars.len());
            vars.extend(self.extra_vars.clone());
        }

        Ok(vars)
    }
}

/// Parse the `y`/`n` debug flag used on the command line
pub fn parse_debug_flag(flag: &str) -> Result<bool> {
    match flag {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(BuildError::InvalidDebugFlag(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_platform() -> PlatformInfo {
        PlatformInfo {
            plat: "linux".to_string(),
            arch: "aarch64".to_string(),
            plat_version: "6.1.0".to_string(),
            processor: "Test CPU".to_string(),
            os: "Linux 12 (Test)".to_string(),
            release_user: "builder".to_string(),
            host: "ci-01".to_string(),
        }
    }

    fn value<'a>(vars: &'a VariableMapping, key: &str) -> Option<&'a str> {
        vars.get(key).flatten()
    }

    #[test]
    fn test_default_paths() {
        let options = BuildOptions::default();
        assert_eq!(options.template_path(), Path::new("src/configure.h.in"));
        assert_eq!(options.output_path(), Path::new("build/configure.h"));
    }

    #[test]
    fn test_release_variables() {
        let options = BuildOptions {
            version: "2.5.11".to_string(),
            build_version: "2.5.11-rc1".to_string(),
            build_time: Some("2024-01-01 12:00:00".to_string()),
            compiler: Some("gcc 13.2".to_string()),
            ..BuildOptions::default()
        };

        let vars = options.variables(&test_platform()).unwrap();

        assert_eq!(value(&vars, "version"), Some("2.5.11"));
        assert_eq!(value(&vars, "version_major"), Some("2"));
        assert_eq!(value(&vars, "version_minor"), Some("5"));
        assert_eq!(value(&vars, "version_alter"), Some("11"));
        assert_eq!(value(&vars, "version_build"), Some("2.5.11-rc1"));
        assert_eq!(value(&vars, "build_time"), Some("2024-01-01 12:00:00"));
        assert_eq!(value(&vars, "mode"), Some("release"));
        assert_eq!(value(&vars, "debug"), Some("0"));
        assert_eq!(value(&vars, "arch"), Some("aarch64"));
        assert_eq!(value(&vars, "release_user"), Some("builder"));
        assert_eq!(value(&vars, "compiler"), Some("gcc 13.2"));
        assert!(!vars.contains_key("author"));
        assert!(!vars.contains_key("aru_athor"));
    }

    #[test]
    fn test_debug_variables() {
        let options = BuildOptions {
            debug: true,
            author: Some("Build Team <build@example.com>".to_string()),
            ..BuildOptions::default()
        };

        let vars = options.variables(&test_platform()).unwrap();
        assert_eq!(value(&vars, "mode"), Some("debug"));
        assert_eq!(value(&vars, "debug"), Some("1"));
        assert_eq!(
            value(&vars, "author"),
            Some("Build Team <build@example.com>")
        );
        assert_eq!(
            value(&vars, "aru_athor"),
            Some("Build Team <build@example.com>")
        );
    }

    #[test]
    fn test_missing_inputs_stay_unset() {
        let vars = BuildOptions::default()
            .variables(&test_platform())
            .unwrap();

        assert_eq!(vars.get("build_time"), Some(None));
        assert_eq!(vars.get("compiler"), Some(None));
    }

    #[test]
    fn test_variable_order() {
        let vars = BuildOptions::default()
            .variables(&test_platform())
            .unwrap();
        let keys: Vec<&str> = vars.iter().map(|(k, _)| k).collect();

        assert_eq!(keys.first(), Some(&"version"));
        assert_eq!(keys.last(), Some(&"compiler"));
        assert!(keys.contains(&"plat_version"));
    }

    #[test]
    fn test_extra_variables_override() {
        let mut extra_vars = HashMap::new();
        extra_vars.insert("mode".to_string(), "profile".to_string());
        extra_vars.insert("vendor".to_string(), "acme".to_string());

        let options = BuildOptions {
            extra_vars,
            ..BuildOptions::default()
        };

        let vars = options.variables(&test_platform()).unwrap();
        assert_eq!(value(&vars, "mode"), Some("profile"));
        assert_eq!(value(&vars, "vendor"), Some("acme"));
    }

    #[test]
    fn test_invalid_version() {
        let options = BuildOptions {
            version: "1.2".to_string(),
            ..BuildOptions::default()
        };

        let err = options.variables(&test_platform()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidVersion { .. }));
    }

    #[test]
    fn test_parse_debug_flag() {
        assert_eq!(parse_debug_flag("y"), Ok(true));
        assert_eq!(parse_debug_flag("n"), Ok(false));
        assert_eq!(
            parse_debug_flag("yes"),
            Err(BuildError::InvalidDebugFlag("yes".to_string()))
        );
    }
}
