pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Action, Args};
pub use runner::{run, InstallOutcome, Runner};
