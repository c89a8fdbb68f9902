//! Command to recursively remove a directory.

use crate::error::CliError;
use crate::utils::{path_ops, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Recursively remove a directory tree.
#[derive(Args)]
pub struct RemoveCommand {
    /// Directory to remove
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Empty the directory but leave it in place
    #[arg(long, overrides_with = "complete")]
    pub keep_root: bool,

    /// Remove the directory itself too, even if configuration says otherwise
    #[arg(long, overrides_with = "keep_root")]
    pub complete: bool,
}

impl RemoveCommand {
    /// Whether the flags ask to remove the root; `None` defers to config.
    fn remove_root(&self) -> Option<bool> {
        if self.keep_root {
            Some(false)
        } else if self.complete {
            Some(true)
        } else {
            None
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ops, config) = path_ops(global)?;
        let complete = self.remove_root().unwrap_or_else(|| config.remove_root());

        ops.recursive_remove(&self.dir, complete)?;

        log::info!(
            "{} {}",
            if complete { "Removed" } else { "Emptied" },
            self.dir.display()
        );
        Ok(())
    }
}
