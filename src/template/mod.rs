//! Lab templates for create-js-lab
//!
//! This module contains the scaffold building blocks:
//! - `files`: Static file contents embedded from `templates/`
//! - `manifest`: The generated `package.json`
//! - `operation`: Defines operations to be performed on the lab directory
//! - `writer`: Applies those operations to the filesystem

pub mod files;
pub mod manifest;
pub mod operation;
pub mod writer;

use std::path::Path;

use crate::{constants::TEST_DIR, error::Result, toolchain::Toolchain};
use manifest::PackageManifest;
use operation::TemplateOperation;

/// One file of a lab, relative to the lab root.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: String,
}

impl TemplateFile {
    fn new(path: &'static str, content: impl Into<String>) -> Self {
        Self { path, content: content.into() }
    }
}

/// The complete, ordered file table for one lab.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    files: Vec<TemplateFile>,
}

impl TemplateSet {
    pub fn new(toolchain: Toolchain, lab_name: &str) -> Result<Self> {
        let manifest = PackageManifest::new(lab_name, toolchain).render()?;
        let files = match toolchain {
            Toolchain::Modern => {
                use files::modern::*;
                vec![
                    TemplateFile::new("package.json", manifest),
                    TemplateFile::new("index.js", INDEX_JS),
                    TemplateFile::new("vitest.config.js", VITEST_CONFIG_JS),
                    TemplateFile::new("test/setup.js", SETUP_JS),
                    TemplateFile::new("test/index.test.js", INDEX_TEST_JS),
                    TemplateFile::new("README.md", README_MD),
                    TemplateFile::new("solution.js", SOLUTION_JS),
                    TemplateFile::new(".gitignore", GITIGNORE),
                    TemplateFile::new(".npmrc", NPMRC),
                ]
            }
            Toolchain::Legacy => {
                use files::legacy::*;
                vec![
                    TemplateFile::new("package.json", manifest),
                    TemplateFile::new("index.js", INDEX_JS),
                    TemplateFile::new("test/helpers.js", HELPERS_JS),
                    TemplateFile::new("test/indexTest.js", INDEX_TEST_JS),
                    TemplateFile::new("README.md", README_MD),
                    TemplateFile::new("solution.js", SOLUTION_JS),
                    TemplateFile::new(".gitignore", GITIGNORE),
                ]
            }
        };
        Ok(Self { files })
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    pub fn get(&self, path: &str) -> Option<&TemplateFile> {
        self.files.iter().find(|file| file.path == path)
    }

    /// Plans the operations that materialize this set under `lab_dir`.
    ///
    /// Directories come first so every write has an existing parent.
    pub fn operations(&self, lab_dir: &Path) -> Vec<TemplateOperation> {
        let mut operations = vec![
            TemplateOperation::CreateDirectory { target: lab_dir.to_path_buf() },
            TemplateOperation::CreateDirectory { target: lab_dir.join(TEST_DIR) },
        ];
        operations.extend(self.files.iter().map(|file| TemplateOperation::Write {
            target: lab_dir.join(file.path),
            content: file.content.clone(),
        }));
        operations
    }
}
