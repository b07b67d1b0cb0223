//! Static lab files, embedded at compile time from the `templates/` directory.
//!
//! Dotfiles are stored without their leading dot so the template directory
//! itself is not affected by them.

pub mod modern {
    pub const INDEX_JS: &str = include_str!("../../templates/modern/index.js");
    pub const SOLUTION_JS: &str = include_str!("../../templates/modern/solution.js");
    pub const VITEST_CONFIG_JS: &str =
        include_str!("../../templates/modern/vitest.config.js");
    pub const SETUP_JS: &str = include_str!("../../templates/modern/test/setup.js");
    pub const INDEX_TEST_JS: &str =
        include_str!("../../templates/modern/test/index.test.js");
    pub const README_MD: &str = include_str!("../../templates/modern/README.md");
    pub const GITIGNORE: &str = include_str!("../../templates/modern/gitignore");
    pub const NPMRC: &str = include_str!("../../templates/modern/npmrc");
}

pub mod legacy {
    pub const INDEX_JS: &str = include_str!("../../templates/legacy/index.js");
    pub const SOLUTION_JS: &str = include_str!("../../templates/legacy/solution.js");
    pub const HELPERS_JS: &str = include_str!("../../templates/legacy/test/helpers.js");
    pub const INDEX_TEST_JS: &str =
        include_str!("../../templates/legacy/test/indexTest.js");
    pub const README_MD: &str = include_str!("../../templates/legacy/README.md");
    pub const GITIGNORE: &str = include_str!("../../templates/legacy/gitignore");
}
