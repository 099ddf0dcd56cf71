//! Schema command handlers

use anyhow::{bail, Result};

use tote_core::Tote;

use crate::output::Output;

/// Show the schema of one entry
pub fn show(tote: &Tote, id: String, by_schema_id: bool, output: &Output) -> Result<()> {
    let schema = if by_schema_id {
        tote.get_schema_by_schema_id(&id)
    } else {
        tote.get_schema_by_id(&id)
    };

    match schema {
        Some(schema) => {
            output.print_schema(schema);
            Ok(())
        }
        None => {
            output.not_found(&format!("Schema for '{}'", id));
            bail!("Schema not found: {}", id)
        }
    }
}

/// List schemas, optionally filtered by tag or @type
pub fn list(
    tote: &Tote,
    tag: Option<String>,
    schema_type: Option<String>,
    output: &Output,
) -> Result<()> {
    let schemas = match (tag, schema_type) {
        (Some(t), _) => tote.get_all_schemas_by_tag(&t),
        (None, Some(t)) => tote.get_all_schemas_by_type(&t),
        (None, None) => tote.get_all_schemas(),
    };

    output.print_schemas(&schemas);
    Ok(())
}

/// Show the minimal {@type, @id} reference for an entry
pub fn reference(tote: &Tote, id: String, by_schema_id: bool, output: &Output) -> Result<()> {
    let reference = if by_schema_id {
        tote.get_ref_by_schema_id(&id)
    } else {
        tote.get_ref_by_id(&id)
    };

    match reference {
        Some(reference) => {
            output.print_ref(&reference);
            Ok(())
        }
        None => {
            output.not_found(&format!("Reference for '{}'", id));
            bail!("Reference not found: {}", id)
        }
    }
}

/// List distinct schema @type values
pub fn types(tote: &Tote, output: &Output) -> Result<()> {
    output.print_types(&tote.get_all_schema_types());
    Ok(())
}
