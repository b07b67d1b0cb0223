use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Joins `lab_name` under `base_dir`, even when the name is absolute.
///
/// Root and drive-prefix components are dropped, so the result never escapes
/// `base_dir` through an absolute name.
pub fn nest_under<P: AsRef<Path>>(base_dir: P, lab_name: &str) -> PathBuf {
    let mut lab_dir = base_dir.as_ref().to_path_buf();
    for component in Path::new(lab_name).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir | Component::Normal(_) => lab_dir.push(component),
        }
    }
    lab_dir
}

/// Resolves the lab directory and refuses to reuse an existing path.
///
/// Anything already at `base_dir/lab_name`, file or directory, is an error.
pub fn get_lab_dir<P: AsRef<Path>>(base_dir: P, lab_name: &str) -> Result<PathBuf> {
    let lab_dir = nest_under(base_dir, lab_name);
    if lab_dir.exists() {
        return Err(Error::LabDirectoryExistsError { lab_name: lab_name.to_string() });
    }
    Ok(lab_dir)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lab_dir_is_joined_onto_base() {
        let temp_dir = TempDir::new().unwrap();
        let lab_dir = get_lab_dir(temp_dir.path(), "loops-lab").unwrap();
        assert_eq!(lab_dir, temp_dir.path().join("loops-lab"));
        assert!(!lab_dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn absolute_lab_name_stays_under_base() {
        let temp_dir = TempDir::new().unwrap();
        let lab_dir = get_lab_dir(temp_dir.path(), "/tmp/escaped-lab").unwrap();
        assert_eq!(lab_dir, temp_dir.path().join("tmp").join("escaped-lab"));
        assert!(lab_dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn current_dir_components_are_skipped() {
        let base = Path::new("base");
        assert_eq!(nest_under(base, "./lab"), base.join("lab"));
        assert_eq!(nest_under(base, "nested/lab"), base.join("nested").join("lab"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_name_checks_the_nested_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("srv/lab")).unwrap();

        assert!(matches!(
            get_lab_dir(temp_dir.path(), "/srv/lab"),
            Err(Error::LabDirectoryExistsError { .. })
        ));
    }

    #[test]
    fn existing_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("taken")).unwrap();

        let err = get_lab_dir(temp_dir.path(), "taken").unwrap_err();
        assert!(matches!(err, Error::LabDirectoryExistsError { ref lab_name } if lab_name == "taken"));
    }

    #[test]
    fn existing_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("notes"), "x").unwrap();

        assert!(get_lab_dir(temp_dir.path(), "notes").is_err());
    }

    #[test]
    fn write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a/b/c.txt");
        write_file("hello", &target).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), "hello");
    }
}
