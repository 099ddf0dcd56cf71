//! schema-tote core library
//!
//! An in-memory lookup store for tagged, schema.org-annotated entries loaded
//! from JSON files. Each file holds an array of wrapper objects:
//!
//! ```json
//! [
//!   {
//!     "id": "john_smith",
//!     "tags": ["core"],
//!     "schema": { "@type": "Person", "@id": "https://example.com#john" }
//!   }
//! ]
//! ```
//!
//! # Quick Start
//!
//! ```text
//! let mut tote = Tote::new();
//! tote.load("schema.json")?;
//!
//! let person = tote.get_schema_by_id("john_smith");
//! let reference = tote.get_ref_by_id("john_smith"); // {"@type", "@id"}
//! let core = tote.get_all_by_tag("CORE");           // tags ignore case
//! ```
//!
//! # Modules
//!
//! - `tote`: The entry store (main entry point)
//! - `models`: Entry and schema reference types
//! - `loader`: Source readers
//! - `error`: Load errors
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod tote;

pub use config::Config;
pub use error::{ToteError, ToteResult};
pub use loader::{FsLoader, Loader};
pub use models::{Entry, SchemaRef};
pub use tote::Tote;
