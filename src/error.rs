use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::{exit_codes, TOOL_NAME};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize package manifest. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Please provide a lab name: create-js-lab lab-name")]
    MissingLabNameError,

    #[error("Directory \"{lab_name}\" already exists")]
    LabDirectoryExistsError { lab_name: String },

    /// The package manager binary could not be started at all.
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but finished with an error.
    #[error("Command `{command}` failed with status: {status}")]
    CommandFailedError { command: String, status: ExitStatus },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1. A missing
/// lab name additionally prints a pointer to `--help` on stdout.
pub fn default_error_handler(err: Error) {
    match &err {
        Error::MissingLabNameError => {
            eprintln!("{err}");
            println!("Run {TOOL_NAME} --help for more information");
        }
        _ => eprintln!("Error: {err}"),
    }
    std::process::exit(exit_codes::FAILURE);
}
