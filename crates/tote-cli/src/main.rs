//! tote CLI
//!
//! Command-line interface for schema-tote - lookups over tagged schema.org
//! entry files.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tote_core::{Config, Tote};

mod commands;
mod output;

use commands::entry::ListFilter;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "tote")]
#[command(about = "tote - Look up tagged schema.org entries in JSON files")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Entry file to load, repeatable (overrides configured data_files)
    #[arg(short = 'f', long = "file", value_name = "PATH", global = true)]
    files: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List entries
    #[command(alias = "ls")]
    List {
        /// Filter by tag (case-insensitive)
        #[arg(short, long, conflicts_with_all = ["entry_type", "schema_type"])]
        tag: Option<String>,
        /// Filter by top-level type
        #[arg(long = "type", conflicts_with = "schema_type")]
        entry_type: Option<String>,
        /// Filter by schema @type
        #[arg(short, long)]
        schema_type: Option<String>,
    },
    /// Show one entry
    Show {
        /// Entry id (or schema @id with --schema-id)
        id: String,
        /// Look up by schema @id instead of entry id
        #[arg(long)]
        schema_id: bool,
    },
    /// Show the schema of one entry
    Schema {
        /// Entry id (or schema @id with --schema-id)
        id: String,
        /// Look up by schema @id instead of entry id
        #[arg(long)]
        schema_id: bool,
    },
    /// List schemas without their wrappers
    Schemas {
        /// Filter by tag (case-insensitive)
        #[arg(short, long, conflicts_with = "schema_type")]
        tag: Option<String>,
        /// Filter by schema @type
        #[arg(short, long)]
        schema_type: Option<String>,
    },
    /// Show the {@type, @id} reference of one entry
    Ref {
        /// Entry id (or schema @id with --schema-id)
        id: String,
        /// Look up by schema @id instead of entry id
        #[arg(long)]
        schema_id: bool,
    },
    /// List all tags
    Tags,
    /// List schema @type values
    Types,
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config.log_level);

    // Commands that don't need any entries loaded
    if let Commands::Config { command } = &cli.command {
        return match command {
            Some(ConfigCommands::Show) | None => commands::config::show(&config, &output),
        };
    }

    let files = if cli.files.is_empty() {
        config.data_files.clone()
    } else {
        cli.files.clone()
    };
    let tote = open_tote(&files)?;

    match cli.command {
        Commands::List {
            tag,
            entry_type,
            schema_type,
        } => commands::entry::list(
            &tote,
            ListFilter {
                tag,
                entry_type,
                schema_type,
            },
            &output,
        ),
        Commands::Show { id, schema_id } => commands::entry::show(&tote, id, schema_id, &output),
        Commands::Schema { id, schema_id } => {
            commands::schema::show(&tote, id, schema_id, &output)
        }
        Commands::Schemas { tag, schema_type } => {
            commands::schema::list(&tote, tag, schema_type, &output)
        }
        Commands::Ref { id, schema_id } => {
            commands::schema::reference(&tote, id, schema_id, &output)
        }
        Commands::Tags => commands::tag::list(&tote, &output),
        Commands::Types => commands::schema::types(&tote, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

/// Load every entry file, in order, into a fresh store
fn open_tote(files: &[PathBuf]) -> Result<Tote> {
    if files.is_empty() {
        bail!(
            "No entry files given. Pass --file <PATH> or set data_files in {}",
            Config::config_file_path().display()
        );
    }

    let mut tote = Tote::new();
    for file in files {
        tote.load(file)
            .with_context(|| format!("Failed to load entries from {:?}", file))?;
    }
    debug!("Opened {} entries from {} file(s)", tote.len(), files.len());
    Ok(tote)
}

/// Log to stderr so stdout stays clean for --json
///
/// RUST_LOG wins over the configured level.
fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tote_core={},tote_cli={}", log_level, log_level))
    });

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_files() {
        let cli =
            Cli::try_parse_from(["tote", "-f", "a.json", "--file", "b.json", "tags"]).unwrap();
        assert_eq!(
            cli.files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert!(matches!(cli.command, Commands::Tags));
    }

    #[test]
    fn test_parse_list_filters_conflict() {
        assert!(Cli::try_parse_from(["tote", "list", "--tag", "core", "--type", "home"]).is_err());
        assert!(Cli::try_parse_from(["tote", "list", "-t", "core", "-s", "Brand"]).is_err());

        let cli = Cli::try_parse_from(["tote", "list", "--type", "home"]).unwrap();
        match cli.command {
            Commands::List { entry_type, .. } => assert_eq!(entry_type.as_deref(), Some("home")),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_ref_by_schema_id() {
        let cli = Cli::try_parse_from([
            "tote",
            "--json",
            "ref",
            "https://example.com#john",
            "--schema-id",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Ref { id, schema_id } => {
                assert_eq!(id, "https://example.com#john");
                assert!(schema_id);
            }
            _ => panic!("expected ref command"),
        }
    }

    #[test]
    fn test_open_tote_loads_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.json");
        let second = temp_dir.path().join("second.json");
        fs::write(&first, r#"[{"id": "one"}]"#).unwrap();
        fs::write(&second, r#"[{"id": "two"}, {"id": "three"}]"#).unwrap();

        let tote = open_tote(&[first, second]).unwrap();
        let ids: Vec<_> = tote.get_all().iter().filter_map(|e| e.id()).collect();
        assert_eq!(ids, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_open_tote_requires_files() {
        let err = open_tote(&[]).unwrap_err();
        assert!(err.to_string().contains("No entry files given"));
    }

    #[test]
    fn test_open_tote_reports_bad_file() {
        let temp_dir = TempDir::new().unwrap();
        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, r#"{"not": "an array"}"#).unwrap();

        let err = open_tote(&[bad]).unwrap_err();
        assert!(err.to_string().contains("Failed to load entries"));
        assert!(format!("{:#}", err).contains("Expected array"));
    }
}
