//! The two JavaScript toolchains a lab can target.
//!
//! Every value here is a fixed table. Nothing is computed from the lab name.

use std::fmt::Display;

/// Toolchain the generated lab is wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toolchain {
    /// ES modules, Vitest and happy-dom.
    #[default]
    Modern,
    /// Mocha and Chai with jsdom sandbox evaluation, selected by `--compat`.
    Legacy,
}

const MODERN_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("vitest", "^1.0.1"),
    ("happy-dom", "^12.10.3"),
    ("@vitest/ui", "^1.0.1"),
    ("@vitest/coverage-v8", "^1.0.1"),
];

const LEGACY_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@babel/core", "^7.23.3"),
    ("@babel/preset-env", "^7.23.3"),
    ("chai", "^4.3.10"),
    ("jsdom", "^22.1.0"),
    ("mocha", "^10.2.0"),
    ("mocha-multi", "^1.1.7"),
];

const MODERN_SCRIPTS: &[(&str, &str)] = &[
    ("test", "vitest run"),
    ("test:watch", "vitest"),
    ("test:ui", "vitest --ui"),
    ("coverage", "vitest run --coverage"),
];

const LEGACY_SCRIPTS: &[(&str, &str)] = &[
    (
        "test",
        "mocha --timeout 5000 -R mocha-multi --reporter-options spec=-,json=.results.json",
    ),
    ("test:watch", "mocha --watch --timeout 5000"),
];

const MODERN_FEATURES: &[&str] = &[
    "ES Modules support (import/export)",
    "Vitest for fast, modern testing",
    "Happy DOM for browser environment testing",
    "Interactive test UI with 'npm run test:ui'",
    "Test coverage reports with 'npm run coverage'",
];

const LEGACY_FEATURES: &[&str] = &[
    "Mocha test runner with Chai's expect assertions",
    "index.js evaluated inside a jsdom window (test/helpers.js)",
    "Babel transform so older syntax checks keep working",
    "JSON results written to .results.json for graders",
];

impl Toolchain {
    /// Picks the toolchain for the `--compat` flag.
    pub fn from_compat(compat: bool) -> Self {
        if compat {
            Toolchain::Legacy
        } else {
            Toolchain::Modern
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Toolchain::Modern => "Modern JavaScript Lab",
            Toolchain::Legacy => "JavaScript Lab (compatibility mode)",
        }
    }

    /// Value of the manifest `type` field, if any.
    pub fn module_type(&self) -> Option<&'static str> {
        match self {
            Toolchain::Modern => Some("module"),
            Toolchain::Legacy => None,
        }
    }

    pub fn dev_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Toolchain::Modern => MODERN_DEV_DEPENDENCIES,
            Toolchain::Legacy => LEGACY_DEV_DEPENDENCIES,
        }
    }

    pub fn scripts(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Toolchain::Modern => MODERN_SCRIPTS,
            Toolchain::Legacy => LEGACY_SCRIPTS,
        }
    }

    /// Test file the user is told to edit first.
    pub fn test_file(&self) -> &'static str {
        match self {
            Toolchain::Modern => "test/index.test.js",
            Toolchain::Legacy => "test/indexTest.js",
        }
    }

    /// Feature bullets printed after a successful scaffold.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Toolchain::Modern => MODERN_FEATURES,
            Toolchain::Legacy => LEGACY_FEATURES,
        }
    }

    /// Heading above the feature bullets.
    pub fn features_heading(&self) -> &'static str {
        match self {
            Toolchain::Modern => "Modern features:",
            Toolchain::Legacy => "Compatibility mode features:",
        }
    }
}

impl Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Toolchain::Modern => "modern",
            Toolchain::Legacy => "legacy",
        };
        write!(f, "{s}")
    }
}
