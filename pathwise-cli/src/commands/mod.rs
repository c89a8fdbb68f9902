//! CLI command implementations.
//!
//! - `slash`: Join path segments
//! - `resolve`: Resolve dot segments lexically
//! - `resolve_real`: Canonicalize an existing path
//! - `is_beneath`: Assert that one path lies beneath another
//! - `remove`: Recursively remove a directory
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod is_beneath;
pub mod remove;
pub mod resolve;
pub mod resolve_real;
pub mod slash;

pub use completions::CompletionsCommand;
pub use is_beneath::IsBeneathCommand;
pub use remove::RemoveCommand;
pub use resolve::ResolveCommand;
pub use resolve_real::ResolveRealCommand;
pub use slash::SlashCommand;
