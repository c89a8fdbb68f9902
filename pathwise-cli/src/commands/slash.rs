//! Command to join path segments.

use crate::error::CliError;
use crate::utils::{path_ops, GlobalOptions};
use clap::Args;

/// Join path segments with a single separator.
#[derive(Args)]
pub struct SlashCommand {
    /// Segments to join, in order
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,
}

impl SlashCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ops, _config) = path_ops(global)?;

        let joined = ops
            .slash(&self.segments)
            .ok_or_else(|| CliError::InvalidArguments("at least one segment is required".into()))?;

        println!("{joined}");
        Ok(())
    }
}
