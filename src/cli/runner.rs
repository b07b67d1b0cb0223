use crate::{
    cli::{Action, Args},
    constants::TOOL_NAME,
    error::{Error, Result},
    installer::PackageManager,
    ioutils::get_lab_dir,
    template::{writer::LabWriter, TemplateSet},
    toolchain::Toolchain,
};
use std::path::{Path, PathBuf};

/// How the install step of a scaffold ended.
#[derive(Debug, PartialEq)]
pub enum InstallOutcome {
    Installed,
    Skipped,
    Failed,
}

/// Main CLI runner that orchestrates a single invocation
pub struct Runner {
    args: Args,
    package_manager: PackageManager,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let package_manager = PackageManager::new(args.package_manager.clone());
        Self { args, package_manager }
    }

    /// Executes the invocation with labs created under the current directory
    pub fn run(self) -> Result<()> {
        let base_dir = std::env::current_dir()?;
        self.run_in(&base_dir)
    }

    /// Executes the invocation with labs created under `base_dir`
    pub fn run_in(self, base_dir: &Path) -> Result<()> {
        let action = self.args.action();
        log::debug!("Resolved action: {action:?}");
        match action {
            Action::Update => {
                self.update();
                Ok(())
            }
            Action::MissingLabName => Err(Error::MissingLabNameError),
            Action::Scaffold { lab_name, toolchain } => {
                self.scaffold(base_dir, &lab_name, toolchain).map(|_| ())
            }
        }
    }

    /// Runs the global self-update. Failures are reported, never returned.
    fn update(&self) {
        println!("Updating {TOOL_NAME}...");
        match self.package_manager.self_update() {
            Ok(()) => println!("✅ Successfully updated to the latest version!"),
            Err(e) => eprintln!("Error updating {TOOL_NAME}: {e}"),
        }
    }

    /// Guards, writes and installs a new lab.
    ///
    /// Only the guard and the writes can fail the run. An install failure is
    /// reported and recorded in the returned outcome.
    pub fn scaffold(
        &self,
        base_dir: &Path,
        lab_name: &str,
        toolchain: Toolchain,
    ) -> Result<(PathBuf, InstallOutcome)> {
        let lab_dir = get_lab_dir(base_dir, lab_name)?;
        log::debug!("Scaffolding {toolchain} lab in {}", lab_dir.display());

        println!("Creating new JavaScript lab: {lab_name}...");
        let templates = TemplateSet::new(toolchain, lab_name)?;
        LabWriter::new(self.args.dry_run).write_all(&templates.operations(&lab_dir))?;

        let outcome = self.install(&lab_dir);
        if self.args.dry_run {
            println!("[DRY RUN] No files were written to {}", lab_dir.display());
        } else if outcome != InstallOutcome::Failed {
            print_next_steps(lab_name, toolchain, &outcome, self.package_manager.program());
        }
        Ok((lab_dir, outcome))
    }

    fn install(&self, lab_dir: &Path) -> InstallOutcome {
        if self.args.dry_run || self.args.skip_install {
            log::info!("Skipping dependency installation");
            return InstallOutcome::Skipped;
        }
        println!("Installing dependencies...");
        match self.package_manager.install(lab_dir) {
            Ok(()) => InstallOutcome::Installed,
            Err(e) => {
                eprintln!("Error installing dependencies: {e}");
                InstallOutcome::Failed
            }
        }
    }
}

/// Prints the fixed success and next-steps block for a toolchain.
fn print_next_steps(
    lab_name: &str,
    toolchain: Toolchain,
    outcome: &InstallOutcome,
    package_manager: &str,
) {
    println!("\n✅ Lab \"{lab_name}\" created successfully!");
    println!("\nNext steps:");
    println!("1. Navigate to the lab directory: cd {lab_name}");
    let mut step = 2;
    if *outcome == InstallOutcome::Skipped {
        println!("{step}. Install dependencies: {package_manager} install");
        step += 1;
    }
    println!("{step}. Edit {} to add your test cases", toolchain.test_file());
    println!("{}. Update README.md with lab instructions", step + 1);
    println!("{}. Create a proper solution in solution.js", step + 2);
    println!("\n{}", toolchain.features_heading());
    for feature in toolchain.features() {
        println!("- {feature}");
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
