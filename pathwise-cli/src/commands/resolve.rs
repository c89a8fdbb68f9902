//! Command to resolve dot segments without touching the filesystem.

use crate::error::CliError;
use crate::utils::{path_ops, GlobalOptions};
use clap::Args;

/// Resolve `.` and `..` segments lexically.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Always prefix the result with a separator
    #[arg(long, overrides_with = "no_absolute")]
    pub absolute: bool,

    /// Only prefix a separator when PATH starts with one
    #[arg(long, overrides_with = "absolute")]
    pub no_absolute: bool,
}

impl ResolveCommand {
    /// The `--absolute`/`--no-absolute` choice; `None` defers to config.
    fn absolute(&self) -> Option<bool> {
        if self.absolute {
            Some(true)
        } else if self.no_absolute {
            Some(false)
        } else {
            None
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ops, config) = path_ops(global)?;
        let absolute = self.absolute().unwrap_or_else(|| config.absolute());

        println!("{}", ops.resolve(&self.path, absolute));
        Ok(())
    }
}
