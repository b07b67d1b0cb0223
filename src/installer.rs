use std::path::Path;
use std::process::{Command, Stdio};

use crate::{
    constants::{self_update, DEFAULT_PACKAGE_MANAGER, INSTALL_ARGS},
    error::{Error, Result},
};

/// External package manager binary (`npm` by default).
///
/// Commands inherit stdin, stdout and stderr so the user sees installer
/// progress directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManager {
    program: String,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}

impl PackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Installs the dependencies declared in `lab_dir/package.json`.
    ///
    /// The child runs with `lab_dir` as its working directory. The current
    /// process directory is left untouched.
    pub fn install<P: AsRef<Path>>(&self, lab_dir: P) -> Result<()> {
        self.run(INSTALL_ARGS, Some(lab_dir.as_ref()))
    }

    /// Reinstalls this tool globally at its latest published version.
    pub fn self_update(&self) -> Result<()> {
        self.run(self.self_update_args(), None)
    }

    /// Global install arguments for this manager.
    ///
    /// Selected by the binary's file stem, so `/usr/local/bin/yarn` and
    /// `yarn.cmd` both map to yarn. Unknown managers get npm's arguments.
    pub fn self_update_args(&self) -> &'static [&'static str] {
        let stem = Path::new(&self.program)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        match stem {
            "yarn" => self_update::YARN,
            "pnpm" => self_update::PNPM,
            "bun" => self_update::BUN,
            _ => self_update::NPM,
        }
    }

    /// Human-readable command line, used in logs and error messages.
    pub fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, args: &[&str], working_dir: Option<&Path>) -> Result<()> {
        let command_line = self.command_line(args);

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = working_dir {
            log::debug!("Running `{command_line}` in {}", dir.display());
            command.current_dir(dir);
        } else {
            log::debug!("Running `{command_line}`");
        }

        let status = command.status().map_err(|source| Error::CommandSpawnError {
            command: command_line.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::CommandFailedError { command: command_line, status });
        }
        Ok(())
    }
}
