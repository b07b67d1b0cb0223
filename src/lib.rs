/// Handles argument parsing and runs an invocation.
pub mod cli;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Runs the external package manager.
pub mod installer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Lab file tables and the code that writes them.
pub mod template;

/// The Modern and Legacy JavaScript toolchains.
pub mod toolchain;
