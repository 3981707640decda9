// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides isolated project directories and a runner for the confgen binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const HEADER_TEMPLATE: &str = r#"#ifndef CONFIGURE_H
#define CONFIGURE_H

#define PROJECT_VERSION       "@version@"
#define PROJECT_VERSION_MAJOR @version_major@
#define PROJECT_VERSION_MINOR @version_minor@
#define PROJECT_VERSION_ALTER @version_alter@
#define PROJECT_BUILD_VERSION "@version_build@"
#define PROJECT_BUILD_TIME    "@build_time@"
#define PROJECT_BUILD_MODE    "@mode@"
#define PROJECT_DEBUG         @debug@
#define PROJECT_PLATFORM      "@plat@"
#define PROJECT_ARCH          "@arch@"
#define PROJECT_COMPILER      "@compiler@"

#endif
"#;

/// A scratch project with `src/` and `build/` directories
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp_dir.path().join("src")).expect("Failed to create src");
        fs::create_dir_all(temp_dir.path().join("build")).expect("Failed to create build");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source_file(&self, name: &str) -> PathBuf {
        self.path().join("src").join(name)
    }

    pub fn build_file(&self, name: &str) -> PathBuf {
        self.path().join("build").join(name)
    }

    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_file(name);
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.build_file(name)).expect("Failed to read generated file")
    }

    /// Run the confgen binary inside this project, isolated from user configuration
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run the confgen binary with extra environment variables set
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_confgen"));
        command
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .env_remove("CONFGEN_LOG_LEVEL")
            .env_remove("CONFGEN_LOG_FORMAT")
            .env_remove("CONFGEN_AUTHOR")
            .envs(vars.iter().copied());
        command.output().expect("Failed to execute confgen")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().join("src").is_dir());
        assert!(env.path().join("build").is_dir());

        let template = env.write_template("configure.h.in", "@version@");
        assert!(template.ends_with("src/configure.h.in"));
    }
}
