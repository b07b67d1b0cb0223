use crate::{
    error::Result,
    ioutils::{create_dir_all, write_file},
    template::operation::TemplateOperation,
};

/// Applies planned template operations to the filesystem in order.
pub struct LabWriter {
    dry_run: bool,
}

impl LabWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Applies every operation, stopping at the first failure.
    ///
    /// Files written before a failure are left in place.
    pub fn write_all(&self, operations: &[TemplateOperation]) -> Result<()> {
        for operation in operations {
            self.handle_file_operation(operation)?;
            log::info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }

    fn handle_file_operation(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {operation:?}");
        if self.dry_run {
            return Ok(());
        }
        match operation {
            TemplateOperation::CreateDirectory { target } => create_dir_all(target),
            TemplateOperation::Write { target, content } => write_file(content, target),
        }
    }
}
