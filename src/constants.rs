//! Constants used throughout create-js-lab

/// Binary and npm package name
pub const TOOL_NAME: &str = "create-js-lab";

/// Package manager used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Environment variable overriding the package manager binary
pub const PACKAGE_MANAGER_ENV: &str = "CREATE_JS_LAB_PACKAGE_MANAGER";

/// Directory holding the generated test files
pub const TEST_DIR: &str = "test";

/// Package manager arguments for installing lab dependencies
pub const INSTALL_ARGS: &[&str] = &["install"];

/// Global self-update arguments, keyed by package manager binary name
pub mod self_update {
    pub const NPM: &[&str] = &["install", "-g", "create-js-lab@latest"];
    pub const YARN: &[&str] = &["global", "add", "create-js-lab@latest"];
    pub const PNPM: &[&str] = &["add", "-g", "create-js-lab@latest"];
    pub const BUN: &[&str] = &["add", "-g", "create-js-lab@latest"];
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
