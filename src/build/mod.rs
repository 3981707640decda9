// ABOUTME: Build parameter module for confgen
// ABOUTME: Parses versions and debug flags, inspects the host, and assembles template variables

pub mod error;
pub mod options;
pub mod platform;
pub mod version;

pub use error::{BuildError, Result};
pub use options::{parse_debug_flag, BuildOptions, DEFAULT_OUTPUT_NAME, DEFAULT_TEMPLATE_NAME};
pub use platform::PlatformInfo;
pub use version::Version;
