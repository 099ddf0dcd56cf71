//! Config command handlers

use anyhow::Result;

use tote_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config: &Config, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_files": config.data_files,
                    "log_level": config.log_level,
                    "config_file": Config::config_file_path()
                })
            );
        }
        OutputFormat::Quiet => {
            for file in &config.data_files {
                println!("{}", file.display());
            }
        }
        OutputFormat::Human => {
            println!("Configuration:");
            if config.data_files.is_empty() {
                println!("  data_files: (not set)");
            } else {
                println!("  data_files:");
                for file in &config.data_files {
                    println!("    {}", file.display());
                }
            }
            println!("  log_level:  {}", config.log_level);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}
