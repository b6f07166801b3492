//! Load command implementation
//!
//! This module implements the `load` command: ingest one or more patron
//! files into a fresh registry and list the result.

use crate::config::RegistryConfig;
use crate::core::events::{ConsoleSink, TracingSink};
use crate::core::registry::PatronRegistry;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Patron files to ingest, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print the resulting patrons as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not auto-load the configured patron file first
    #[arg(long)]
    pub no_auto_load: bool,
}

impl LoadArgs {
    /// Execute the load command
    ///
    /// Returns exit code 1 if any file could not be read, 0 otherwise.
    pub fn execute(&self, config: &RegistryConfig) -> anyhow::Result<i32> {
        let mut config = config.clone();
        if self.no_auto_load {
            config.registry.auto_load_path = None;
        }

        // JSON output must stay machine-readable, so events go to the log instead
        let mut registry = if self.json {
            PatronRegistry::from_config(&config, TracingSink)
        } else {
            PatronRegistry::from_config(&config, ConsoleSink::stdout())
        };

        let failed = self.ingest_all(&mut registry);

        let stdout = std::io::stdout();
        self.print_patrons(&registry, stdout.lock())?;

        Ok(if failed > 0 { 1 } else { 0 })
    }

    /// Ingest every file, returning how many could not be read
    fn ingest_all(&self, registry: &mut PatronRegistry) -> usize {
        let mut failed = 0;
        for file in &self.files {
            match registry.add_patrons_from_file(file) {
                Ok(report) => tracing::debug!(
                    source = %report.source,
                    total_lines = report.total_lines(),
                    loaded = report.loaded,
                    clean = report.is_clean(),
                    "File loaded"
                ),
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "File failed to load");
                    failed += 1;
                }
            }
        }
        failed
    }

    fn print_patrons<W: Write>(&self, registry: &PatronRegistry, mut out: W) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut out, registry.patrons())?;
            writeln!(out)?;
        } else {
            writeln!(out, "List of current Patrons:")?;
            for patron in registry.patrons() {
                writeln!(out, "{patron}")?;
            }
        }
        Ok(())
    }
}
