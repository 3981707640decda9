// ABOUTME: Host platform introspection for build variables
// ABOUTME: Collects OS, architecture, kernel, CPU, user, and host name facts

use serde::Serialize;
use std::env;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::error::{BuildError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub plat: String,
    pub arch: String,
    pub plat_version: String,
    pub processor: String,
    pub os: String,
    pub release_user: String,
    pub host: String,
}

impl PlatformInfo {
    /// Collect information about the machine running the build
    pub fn collect() -> Result<Self> {
        let host = hostname::get()
            .map_err(|e| BuildError::Platform(format!("failed to get hostname: {}", e)))?
            .to_string_lossy()
            .to_string();

        let plat = env::consts::OS.to_string();
        let arch = env::consts::ARCH.to_string();
        let plat_version = System::kernel_version().unwrap_or_else(|| "unknown".to_string());

        let system = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        );
        let processor = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| arch.clone());

        let os = System::long_os_version()
            .unwrap_or_else(|| format!("{}-{}-{}", plat, plat_version, arch));

        let release_user = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());

        Ok(Self {
            plat,
            arch,
            plat_version,
            processor,
            os,
            release_user,
            host,
        })
    }

    /// Variable names and values, in the order they appear in generated headers
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("plat", self.plat.as_str()),
            ("arch", self.arch.as_str()),
            ("plat_version", self.plat_version.as_str()),
            ("processor", self.processor.as_str()),
            ("os", self.os.as_str()),
            ("release_user", self.release_user.as_str()),
            ("host", self.host.as_str()),
        ]
    }
}
