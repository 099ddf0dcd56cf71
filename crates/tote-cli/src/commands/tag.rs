//! Tag command handlers

use anyhow::Result;

use tote_core::Tote;

use crate::output::Output;

/// List all tags with usage counts
pub fn list(tote: &Tote, output: &Output) -> Result<()> {
    let tags = tote.get_tags_with_counts();
    output.print_tags(&tags);
    Ok(())
}
