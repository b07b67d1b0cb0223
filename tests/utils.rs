#![allow(dead_code)]

use create_js_lab::cli::{Args, Runner};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use walkdir::WalkDir;

/// Relative paths of every file below `dir`.
pub fn list_files(dir: &Path) -> BTreeSet<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

/// Recursively copies `src` into `dst`.
pub fn copy_dir(src: &Path, dst: &Path) {
    for entry in WalkDir::new(src).into_iter().filter_map(Result::ok) {
        let target = dst.join(entry.path().strip_prefix(src).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Prints files present in only one directory and files whose contents differ.
///
/// # Arguments
/// * `actual` - The directory to check.
/// * `expected` - The directory it should match.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let files1 = list_files(actual);
    let files2 = list_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual:   {:?}", actual);
    println!("Expected: {:?}", expected);

    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }
    for file in files1.intersection(&files2) {
        if fs::read(actual.join(file)).unwrap() != fs::read(expected.join(file)).unwrap() {
            println!("  ~ {file}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two directories are byte-for-byte identical.
pub fn assert_same_dir(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Runs the library entry point in `base_dir` with the given extra flags.
pub fn run_in(base_dir: &Path, argv: &[&str]) -> create_js_lab::error::Result<()> {
    let argv: Vec<&str> = std::iter::once("create-js-lab").chain(argv.iter().copied()).collect();
    let args = <Args as clap::Parser>::try_parse_from(argv).unwrap();
    Runner::new(args).run_in(base_dir)
}

/// Runs the compiled binary inside `cwd`.
pub fn run_binary(cwd: &Path, argv: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-js-lab"))
        .args(argv)
        .current_dir(cwd)
        .env_remove(create_js_lab::constants::PACKAGE_MANAGER_ENV)
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn lab_path(base_dir: &Path, lab_name: &str) -> PathBuf {
    base_dir.join(lab_name)
}
