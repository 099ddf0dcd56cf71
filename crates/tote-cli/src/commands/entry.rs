//! Entry command handlers

use anyhow::{bail, Result};

use tote_core::Tote;

use crate::output::Output;

/// Filters accepted by `list`; clap keeps them mutually exclusive
#[derive(Debug, Default)]
pub struct ListFilter {
    pub tag: Option<String>,
    pub entry_type: Option<String>,
    pub schema_type: Option<String>,
}

/// List entries, optionally filtered
pub fn list(tote: &Tote, filter: ListFilter, output: &Output) -> Result<()> {
    let entries = match filter {
        ListFilter { tag: Some(t), .. } => tote.get_all_by_tag(&t),
        ListFilter {
            entry_type: Some(t),
            ..
        } => tote.get_all_by_type(&t),
        ListFilter {
            schema_type: Some(t),
            ..
        } => tote.get_all_by_schema_type(&t),
        _ => tote.get_all().iter().collect(),
    };

    output.print_entries(&entries);
    Ok(())
}

/// Show a single entry by id or schema @id
pub fn show(tote: &Tote, id: String, by_schema_id: bool, output: &Output) -> Result<()> {
    let entry = if by_schema_id {
        tote.get_by_schema_id(&id)
    } else {
        tote.get_by_id(&id)
    };

    match entry {
        Some(entry) => {
            output.print_entry(entry);
            Ok(())
        }
        None => {
            output.not_found(&format!("Entry '{}'", id));
            bail!("Entry not found: {}", id)
        }
    }
}
