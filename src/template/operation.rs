use std::path::PathBuf;

/// A single planned filesystem step of a scaffold.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf },
    Write { target: PathBuf, content: String },
}

impl TemplateOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target } => target,
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            TemplateOperation::Write { target, content } => {
                format!(
                    "{}Writing to '{}' ({} bytes)",
                    prefix,
                    target.display(),
                    content.len()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_message() {
        let op = TemplateOperation::CreateDirectory { target: PathBuf::from("lab/test") };
        assert_eq!(op.get_message(false), "Creating directory 'lab/test'");
        assert_eq!(op.get_message(true), "[DRY RUN] Creating directory 'lab/test'");
    }

    #[test]
    fn write_message_includes_size() {
        let op = TemplateOperation::Write {
            target: PathBuf::from("lab/index.js"),
            content: "abc".into(),
        };
        assert_eq!(op.get_message(false), "Writing to 'lab/index.js' (3 bytes)");
        assert!(op.get_message(true).starts_with("[DRY RUN] "));
    }

    #[test]
    fn target_path_for_each_variant() {
        let dir = TemplateOperation::CreateDirectory { target: PathBuf::from("a") };
        let file =
            TemplateOperation::Write { target: PathBuf::from("b"), content: String::new() };
        assert_eq!(dir.target_path(), &PathBuf::from("a"));
        assert_eq!(file.target_path(), &PathBuf::from("b"));
    }
}
