//! Command to canonicalize a path against the filesystem.

use crate::error::CliError;
use crate::utils::{path_ops, GlobalOptions};
use clap::Args;

/// Canonicalize an existing path, following symlinks.
#[derive(Args)]
pub struct ResolveRealCommand {
    /// Path to canonicalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory that a relative PATH is joined onto
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<String>,
}

impl ResolveRealCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ops, _config) = path_ops(global)?;

        match ops.try_resolve_real(&self.path, self.working_dir.as_deref()) {
            Ok(real) => {
                println!("{real}");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(CliError::SemanticFailure(format!(
                "Path does not exist: {}",
                self.path
            ))),
            Err(e) => Err(CliError::from(e)),
        }
    }
}
