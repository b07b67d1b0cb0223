use crate::constants::{exit_codes, verbosity, DEFAULT_PACKAGE_MANAGER, PACKAGE_MANAGER_ENV};
use crate::toolchain::Toolchain;
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{name} - {about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = r#"Examples:
  create-js-lab variables-lab            # Create lab with modern setup
  create-js-lab variables-lab --compat   # Create lab for the legacy Mocha/Chai toolchain
  create-js-lab --update                 # Update to the latest version"#;

/// CLI arguments for create-js-lab.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "create-js-lab",
    version,
    about = "A modern tool to create JavaScript labs with Vitest testing",
    long_about = None,
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Name of the lab directory to create.
    #[arg(value_name = "LAB_NAME")]
    pub lab_name: Option<String>,

    /// Trailing words after the lab name are accepted and ignored.
    #[arg(hide = true, value_name = "IGNORED")]
    pub rest: Vec<String>,

    /// Update to the latest version.
    #[arg(long)]
    pub update: bool,

    /// Target the legacy Mocha/Chai toolchain.
    #[arg(short, long)]
    pub compat: bool,

    /// Write the lab but do not install its dependencies.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Package manager used for installing and updating.
    #[arg(long = "package-manager", value_name = "BIN", env = PACKAGE_MANAGER_ENV, default_value = DEFAULT_PACKAGE_MANAGER)]
    pub package_manager: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a single invocation is going to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Update,
    MissingLabName,
    Scaffold { lab_name: String, toolchain: Toolchain },
}

impl Args {
    /// Resolves the flags into one action.
    ///
    /// `--update` wins over everything else. An empty lab name counts as missing.
    pub fn action(&self) -> Action {
        if self.update {
            return Action::Update;
        }
        match self.lab_name.as_deref() {
            None | Some("") => Action::MissingLabName,
            Some(lab_name) => Action::Scaffold {
                lab_name: lab_name.to_string(),
                toolchain: Toolchain::from_compat(self.compat),
            },
        }
    }
}

/// Parse command line arguments.
///
/// Help and version output exit with `SUCCESS`; any other parse error prints
/// clap's message and exits with `FAILURE`.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if let Err(print_err) = e.print() {
            eprintln!("Failed to display usage information: {print_err}");
        }
        std::process::exit(exit_code_for(e.kind()));
    })
}

/// Exit code for a clap parse failure.
pub fn exit_code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::FAILURE,
    }
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
