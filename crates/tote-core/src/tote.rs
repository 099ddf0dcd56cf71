//! The entry store
//!
//! A [`Tote`] owns an ordered list of [`Entry`] values loaded from JSON
//! files and answers lookups over it.
//!
//! ## Loading
//!
//! - `load` appends the file's entries after whatever is already held.
//! - `reload` clears first, then loads. If the load fails the store stays
//!   empty.
//!
//! A file whose top-level value is not an array is rejected before anything
//! is appended.
//!
//! ## Lookups
//!
//! Every query is a linear scan in insertion order. Single-result lookups
//! return the first match, so duplicate ids resolve to the earliest entry.
//! Tag matching ignores case; everything else is exact.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tote = Tote::new();
//! tote.load("schema.json")?;
//!
//! let person = tote.get_ref_by_id("john_smith");
//! let core = tote.get_all_schemas_by_tag("core");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{json_kind, ToteError, ToteResult};
use crate::loader::{FsLoader, Loader};
use crate::models::{Entry, SchemaRef};

/// In-memory store of tagged, schema-annotated entries
pub struct Tote<L = FsLoader> {
    /// Entries in load order
    data: Vec<Entry>,
    /// Source reader
    loader: L,
}

impl Tote<FsLoader> {
    /// Create an empty store that reads from the file system
    pub fn new() -> Self {
        Self::with_loader(FsLoader)
    }
}

impl Default for Tote<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for Tote<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tote")
            .field("entries", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl<L: Loader> Tote<L> {
    /// Create an empty store that reads through `loader`
    pub fn with_loader(loader: L) -> Self {
        Self {
            data: Vec::new(),
            loader,
        }
    }

    // ==================== Loading ====================

    /// Append the entries of a JSON array file
    ///
    /// On error nothing is appended.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ToteResult<&[Entry]> {
        let path = path.as_ref();
        debug!("Loading entries from {:?}", path);

        let text = self
            .loader
            .read_to_string(path)
            .map_err(|e| ToteError::from_io(e, path.to_path_buf()))?;

        self.append_parsed(path, &text)
    }

    /// Replace all entries with the contents of a JSON array file
    ///
    /// The store is cleared before loading, so a failed reload leaves it empty.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> ToteResult<&[Entry]> {
        self.data.clear();
        self.load(path)
    }

    /// Append entries from JSON text already in memory
    ///
    /// `label` names the source in errors and logs.
    pub fn load_str(&mut self, label: impl AsRef<Path>, text: &str) -> ToteResult<&[Entry]> {
        self.append_parsed(label.as_ref(), text)
    }

    fn append_parsed(&mut self, path: &Path, text: &str) -> ToteResult<&[Entry]> {
        let entries = parse_entries(path, text)?;
        let added = entries.len();
        self.data.extend(entries);

        info!(
            "Loaded {} entries from {:?} ({} total)",
            added,
            path,
            self.data.len()
        );
        Ok(&self.data)
    }

    // ==================== Entry Lookups ====================

    /// All entries in insertion order
    pub fn get_all(&self) -> &[Entry] {
        &self.data
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First entry whose top-level `id` equals `id`
    pub fn get_by_id(&self, id: &str) -> Option<&Entry> {
        self.data.iter().find(|e| e.id() == Some(id))
    }

    /// First entry whose `schema["@id"]` equals `schema_id`
    pub fn get_by_schema_id(&self, schema_id: &str) -> Option<&Entry> {
        self.data.iter().find(|e| e.schema_id() == Some(schema_id))
    }

    /// Entries whose `schema["@type"]` equals `schema_type`
    pub fn get_all_by_schema_type(&self, schema_type: &str) -> Vec<&Entry> {
        self.data
            .iter()
            .filter(|e| e.schema_type() == Some(schema_type))
            .collect()
    }

    /// Entries whose top-level `type` equals `entry_type`
    pub fn get_all_by_type(&self, entry_type: &str) -> Vec<&Entry> {
        self.data
            .iter()
            .filter(|e| e.entry_type() == Some(entry_type))
            .collect()
    }

    /// Entries tagged with `tag`, ignoring case
    pub fn get_all_by_tag(&self, tag: &str) -> Vec<&Entry> {
        self.data.iter().filter(|e| e.has_tag(tag)).collect()
    }

    // ==================== References ====================

    /// `{@type, @id}` of the schema of the entry with top-level `id`
    pub fn get_ref_by_id(&self, id: &str) -> Option<SchemaRef> {
        self.get_by_id(id).and_then(Entry::schema_ref)
    }

    /// `{@type, @id}` of the schema whose `@id` is `schema_id`
    pub fn get_ref_by_schema_id(&self, schema_id: &str) -> Option<SchemaRef> {
        self.get_by_schema_id(schema_id).and_then(Entry::schema_ref)
    }

    // ==================== Schema Lookups ====================

    /// Schema of the entry with top-level `id`
    pub fn get_schema_by_id(&self, id: &str) -> Option<&Map<String, Value>> {
        self.get_by_id(id).and_then(Entry::schema)
    }

    /// Schema whose `@id` is `schema_id`
    pub fn get_schema_by_schema_id(&self, schema_id: &str) -> Option<&Map<String, Value>> {
        self.get_by_schema_id(schema_id).and_then(Entry::schema)
    }

    /// Every schema, skipping entries that have none
    pub fn get_all_schemas(&self) -> Vec<&Map<String, Value>> {
        self.data.iter().filter_map(Entry::schema).collect()
    }

    /// Schemas whose `@type` equals `schema_type`
    pub fn get_all_schemas_by_type(&self, schema_type: &str) -> Vec<&Map<String, Value>> {
        self.get_all_by_schema_type(schema_type)
            .into_iter()
            .filter_map(Entry::schema)
            .collect()
    }

    /// Schemas of entries tagged with `tag`, ignoring case
    pub fn get_all_schemas_by_tag(&self, tag: &str) -> Vec<&Map<String, Value>> {
        self.get_all_by_tag(tag)
            .into_iter()
            .filter_map(Entry::schema)
            .collect()
    }

    // ==================== Summaries ====================

    /// Lower-cased tags with the number of entries carrying each, sorted by tag
    pub fn get_tags_with_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for entry in &self.data {
            let Some(tags) = entry.tags() else {
                continue;
            };
            let unique: BTreeSet<String> = tags.iter().map(|t| t.to_lowercase()).collect();
            for tag in unique {
                *counts.entry(tag).or_default() += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// Distinct schema `@type` values in first-seen order
    pub fn get_all_schema_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for schema_type in self.data.iter().filter_map(Entry::schema_type) {
            if !types.contains(&schema_type) {
                types.push(schema_type);
            }
        }
        types
    }
}

/// Parse JSON text into entries, requiring a top-level array
fn parse_entries(path: &Path, text: &str) -> ToteResult<Vec<Entry>> {
    let value: Value = serde_json::from_str(text).map_err(|source| ToteError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(items.into_iter().map(Entry::new).collect()),
        other => {
            let found = json_kind(&other);
            warn!("Rejected {:?}: expected array, found {}", path, found);
            Err(ToteError::Shape {
                path: path.to_path_buf(),
                found,
            })
        }
    }
}
