//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;
use serde_json::{Map, Value};

use tote_core::{Entry, SchemaRef};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single entry
    pub fn print_entry(&self, entry: &Entry) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", entry.id().unwrap_or("(none)"));
                if let Some(entry_type) = entry.entry_type() {
                    println!("Type:        {}", entry_type);
                }
                if let Some(tags) = entry.tags() {
                    if !tags.is_empty() {
                        println!("Tags:        {}", tags.join(", "));
                    }
                }
                match entry.schema() {
                    Some(schema) => {
                        println!("Schema type: {}", value_label(schema.get("@type")));
                        println!("Schema ID:   {}", value_label(schema.get("@id")));
                        println!();
                        println!("{}", to_pretty_json(schema));
                    }
                    None => println!("Schema:      (none)"),
                }
            }
            OutputFormat::Json => {
                println!("{}", to_pretty_json(entry));
            }
            OutputFormat::Quiet => {
                println!("{}", entry.id().unwrap_or_default());
            }
        }
    }

    /// Print a list of entries
    pub fn print_entries(&self, entries: &[&Entry]) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No entries found.");
                    return;
                }
                for entry in entries {
                    let tags = entry.tags().map(|t| t.join(", ")).unwrap_or_default();
                    println!(
                        "{} | {} | {} | {}",
                        truncate(entry.id().unwrap_or("-"), 24),
                        truncate(entry.schema_type().unwrap_or("-"), 16),
                        truncate(entry.schema_id().unwrap_or("-"), 40),
                        truncate(&tags, 30)
                    );
                }
                println!("\n{} entry(ies)", entries.len());
            }
            OutputFormat::Json => {
                println!("{}", to_pretty_json(entries));
            }
            OutputFormat::Quiet => {
                for entry in entries {
                    if let Some(id) = entry.id() {
                        println!("{}", id);
                    }
                }
            }
        }
    }

    /// Print a single schema object
    pub fn print_schema(&self, schema: &Map<String, Value>) {
        match self.format {
            OutputFormat::Human | OutputFormat::Json => {
                println!("{}", to_pretty_json(schema));
            }
            OutputFormat::Quiet => {
                println!("{}", value_label(schema.get("@id")));
            }
        }
    }

    /// Print a list of schema objects
    pub fn print_schemas(&self, schemas: &[&Map<String, Value>]) {
        match self.format {
            OutputFormat::Human => {
                if schemas.is_empty() {
                    println!("No schemas found.");
                    return;
                }
                for schema in schemas {
                    println!(
                        "{} | {}",
                        truncate(&value_label(schema.get("@type")), 16),
                        value_label(schema.get("@id"))
                    );
                }
                println!("\n{} schema(s)", schemas.len());
            }
            OutputFormat::Json => {
                println!("{}", to_pretty_json(schemas));
            }
            OutputFormat::Quiet => {
                for schema in schemas {
                    println!("{}", value_label(schema.get("@id")));
                }
            }
        }
    }

    /// Print a schema reference
    pub fn print_ref(&self, reference: &SchemaRef) {
        match self.format {
            OutputFormat::Human => {
                println!("@type: {}", value_label(reference.schema_type.as_ref()));
                println!("@id:   {}", value_label(reference.id.as_ref()));
            }
            OutputFormat::Json => {
                println!("{}", to_pretty_json(reference));
            }
            OutputFormat::Quiet => {
                println!("{}", value_label(reference.id.as_ref()));
            }
        }
    }

    /// Print a list of tags
    pub fn print_tags(&self, tags: &[(String, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return;
                }
                for (name, count) in tags {
                    println!("{} ({})", name, count);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                let json_tags: Vec<_> = tags
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                println!("{}", to_pretty_json(&json_tags));
            }
            OutputFormat::Quiet => {
                for (name, _) in tags {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print schema types
    pub fn print_types(&self, types: &[&str]) {
        match self.format {
            OutputFormat::Human => {
                if types.is_empty() {
                    println!("No schema types found.");
                    return;
                }
                for schema_type in types {
                    println!("{}", schema_type);
                }
                println!("\n{} type(s)", types.len());
            }
            OutputFormat::Json => {
                println!("{}", to_pretty_json(types));
            }
            OutputFormat::Quiet => {
                for schema_type in types {
                    println!("{}", schema_type);
                }
            }
        }
    }

    /// Report that a lookup found nothing
    pub fn not_found(&self, what: &str) {
        match self.format {
            OutputFormat::Human => println!("{} not found.", what),
            OutputFormat::Json => println!("null"),
            OutputFormat::Quiet => {}
        }
    }
}

/// Pretty JSON for output; serializing plain JSON data cannot fail
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

/// Display a schema value: strings bare, anything else as JSON
fn value_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

/// Truncate a string to max chars, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
