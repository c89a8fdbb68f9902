//! Command to assert that one path lies beneath another.

use crate::error::CliError;
use crate::utils::{path_ops, GlobalOptions};
use clap::Args;
use pathwise::Containment;

/// Assert that CHILD lies beneath PARENT.
///
/// The comparison is a plain prefix test after the normalization chosen by
/// `--mode`, so `/a/bc` counts as beneath `/a/b`.
#[derive(Args)]
pub struct IsBeneathCommand {
    /// Candidate child path
    #[arg(value_name = "CHILD")]
    pub child: String,

    /// Candidate parent path
    #[arg(value_name = "PARENT")]
    pub parent: String,

    /// Normalization before comparing (verbatim, lexical or real)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Containment>,

    /// Base directory for a relative CHILD (real mode only)
    #[arg(long, value_name = "DIR")]
    pub child_dir: Option<String>,

    /// Base directory for a relative PARENT (real mode only)
    #[arg(long, value_name = "DIR")]
    pub parent_dir: Option<String>,

    /// Invert the assertion (fail if CHILD is beneath PARENT)
    #[arg(long)]
    pub not: bool,
}

impl IsBeneathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ops, config) = path_ops(global)?;
        let mode = self.mode.unwrap_or_else(|| config.containment());

        if mode != Containment::Real && (self.child_dir.is_some() || self.parent_dir.is_some()) {
            log::warn!("--child-dir and --parent-dir only apply in real mode; ignoring");
        }

        let beneath = ops.contains(
            mode,
            &self.child,
            &self.parent,
            self.child_dir.as_deref(),
            self.parent_dir.as_deref(),
        );
        log::debug!("{mode} containment of {:?} in {:?}: {beneath}", self.child, self.parent);

        if beneath != self.not {
            Ok(())
        } else {
            let msg = if self.not {
                format!("Assertion failed: {} is beneath {}", self.child, self.parent)
            } else {
                format!("Assertion failed: {} is not beneath {}", self.child, self.parent)
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
