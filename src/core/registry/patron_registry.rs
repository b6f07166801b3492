//! The patron registry
//!
//! Owns every [`Patron`] for the lifetime of the process, issues unique IDs
//! and ingests batches of patrons from delimited text.

use super::allocator::{IdAllocator, DEFAULT_MAX_ID_ATTEMPTS};
use crate::config::RegistryConfig;
use crate::core::events::{EventSink, RegistryEvent, TracingSink};
use crate::core::ingest::{parse_line, IngestReport, RecordLines};
use crate::core::validation::{self, check_fine_range, MAX_OVERDUE_FINE};
use crate::domain::{Patron, PatronId, RegistryError, Result};
use rand::RngCore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// In-memory registry of library patrons
///
/// Patrons are kept in insertion order. IDs are unique for the registry's
/// lifetime; removing a patron retires its ID permanently.
///
/// # Example
///
/// ```
/// use patron_registry::core::registry::PatronRegistry;
/// use patron_registry::core::events::EventLog;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// # fn main() -> patron_registry::domain::Result<()> {
/// let events = EventLog::new();
/// let mut registry = PatronRegistry::builder()
///     .rng(StdRng::seed_from_u64(1))
///     .sink(events.clone())
///     .build();
///
/// let report = registry.add_patrons_from_reader(
///     "Alice,Smith,1 Main St,12.50\nBob,Jones,2 Oak Ave,300\n".as_bytes(),
///     "inline",
/// )?;
/// assert_eq!(report.loaded, 1);
/// assert_eq!(registry.len(), 1);
///
/// let id = registry.patrons()[0].id().to_string();
/// assert!(registry.remove_patron(&id));
/// assert!(!registry.remove_patron(&id));
/// # Ok(())
/// # }
/// ```
pub struct PatronRegistry {
    patrons: Vec<Patron>,
    ids: IdAllocator,
    sink: Box<dyn EventSink>,
}

impl PatronRegistry {
    /// Create an empty registry with an entropy-seeded ID source and the
    /// tracing sink
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from configuration, auto-loading the configured file
    pub fn from_config(config: &RegistryConfig, sink: impl EventSink + 'static) -> Self {
        let mut builder = Self::builder()
            .sink(sink)
            .max_id_attempts(config.registry.max_id_attempts);
        if let Some(path) = &config.registry.auto_load_path {
            builder = builder.auto_load(path);
        }
        builder.build()
    }

    /// Issue a new unique ID
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdSpaceExhausted`] once IDs 1-9999 are all used.
    pub fn generate_unique_id(&mut self) -> Result<PatronId> {
        let id = self.ids.generate()?;
        tracing::debug!(patron_id = %id, issued = self.ids.issued(), "Generated patron ID");
        Ok(id)
    }

    /// Append a patron
    ///
    /// No validation or duplicate check is made here; callers validate first.
    /// The patron's ID is recorded as used so it is never issued later.
    pub fn add_patron(&mut self, patron: Patron) {
        self.ids.reserve(patron.id());
        tracing::debug!(patron_id = %patron.id(), "Adding patron");
        self.sink.emit(&RegistryEvent::PatronAdded(patron.clone()));
        self.patrons.push(patron);
    }

    /// Validate raw fields, assign an ID and add the patron
    ///
    /// Applies [`validate_patron`](Self::validate_patron) and then the
    /// `[0, 250]` fine bound, in that order.
    pub fn add_new_patron(
        &mut self,
        first_name: &str,
        last_name: &str,
        address: &str,
        overdue_fine: f64,
    ) -> Result<Patron> {
        Self::validate_patron(first_name, last_name, address, overdue_fine)?;
        if !check_fine_range(overdue_fine) {
            return Err(RegistryError::Validation(format!(
                "Overdue fine must be between $0 and ${MAX_OVERDUE_FINE}."
            )));
        }

        let id = self.generate_unique_id()?;
        let patron = Patron::new(id, first_name, last_name, address, overdue_fine)?;
        self.add_patron(patron.clone());
        Ok(patron)
    }

    /// Remove the first patron whose ID equals `id`
    ///
    /// Returns false when no patron matches. The ID stays retired either way.
    pub fn remove_patron(&mut self, id: &str) -> bool {
        match self.patrons.iter().position(|p| p.id().as_str() == id) {
            Some(index) => {
                let patron = self.patrons.remove(index);
                tracing::debug!(patron_id = %patron.id(), "Removed patron");
                self.sink.emit(&RegistryEvent::PatronRemoved(patron));
                true
            }
            None => {
                self.sink.emit(&RegistryEvent::PatronNotFound { id: id.to_string() });
                false
            }
        }
    }

    /// Current patrons in insertion order
    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    /// First patron with the given ID
    pub fn find(&self, id: &str) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    /// True if the ID was ever issued, including IDs of removed patrons
    pub fn is_id_used(&self, id: &PatronId) -> bool {
        self.ids.is_used(id)
    }

    /// Check names and fine sign of raw fields
    ///
    /// See [`validation::validate_patron`].
    pub fn validate_patron(
        first_name: &str,
        last_name: &str,
        address: &str,
        overdue_fine: f64,
    ) -> Result<()> {
        validation::validate_patron(first_name, last_name, address, overdue_fine)
    }

    /// Ingest patrons from a file
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be opened or read.
    /// Patrons added from earlier lines are kept.
    pub fn add_patrons_from_file(&mut self, path: impl AsRef<Path>) -> Result<IngestReport> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => return Err(self.fail_ingest(&source, RegistryError::Io(e.to_string()))),
        };

        self.add_patrons_from_reader(BufReader::new(file), &source)
    }

    /// Ingest patrons from any buffered reader, one record per line
    ///
    /// Lines may end in `\n`, `\r\n` or `\r`; invalid UTF-8 is replaced with
    /// U+FFFD. Malformed or invalid lines are skipped and reported; they never
    /// abort the batch. A read error or ID exhaustion aborts it without
    /// rolling back.
    pub fn add_patrons_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        source: &str,
    ) -> Result<IngestReport> {
        crate::log_ingest_start!(source);
        let mut report = IngestReport::new(source);

        for (index, line) in RecordLines::new(reader).enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Err(self.fail_ingest(source, RegistryError::Io(e.to_string()))),
            };

            let record = match parse_line(&line) {
                Ok(record) => record,
                Err(reason) => {
                    crate::log_line_skipped!(source, line_number, &reason);
                    self.sink.emit(&RegistryEvent::LineSkipped {
                        line_number,
                        line: line.clone(),
                        reason: reason.clone(),
                    });
                    report.add_skipped(line_number, &line, reason);
                    continue;
                }
            };

            let id = match self.generate_unique_id() {
                Ok(id) => id,
                Err(e) => return Err(self.fail_ingest(source, e)),
            };
            let patron = Patron::new(
                id,
                record.first_name,
                record.last_name,
                record.address,
                record.overdue_fine,
            )?;
            self.add_patron(patron);
            report.loaded += 1;
        }

        self.sink.emit(&RegistryEvent::IngestCompleted {
            source: source.to_string(),
            loaded: report.loaded,
        });
        report.log_summary();
        Ok(report)
    }

    /// Ingest a file only if it exists; a missing file is not an error
    ///
    /// Returns `None` when the file is absent or could not be read.
    pub fn auto_load(&mut self, path: impl AsRef<Path>) -> Option<IngestReport> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Auto-load file not present, skipping");
            return None;
        }

        match self.add_patrons_from_file(path) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Auto-load failed");
                None
            }
        }
    }

    fn fail_ingest(&mut self, source: &str, error: RegistryError) -> RegistryError {
        tracing::error!(source = %source, error = %error, "Ingestion aborted");
        self.sink.emit(&RegistryEvent::IngestFailed {
            source: source.to_string(),
            error: error.reason(),
        });
        error
    }
}

impl Default for PatronRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PatronRegistry`]
pub struct RegistryBuilder {
    rng: Option<Box<dyn RngCore>>,
    sink: Option<Box<dyn EventSink>>,
    max_id_attempts: usize,
    auto_load_path: Option<PathBuf>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            rng: None,
            sink: None,
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
            auto_load_path: None,
        }
    }

    /// Random source used for ID generation
    pub fn rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Receiver of registry events
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Random draws per ID before the fallback scan
    pub fn max_id_attempts(mut self, max_id_attempts: usize) -> Self {
        self.max_id_attempts = max_id_attempts;
        self
    }

    /// File ingested on build if it exists
    pub fn auto_load(mut self, path: impl Into<PathBuf>) -> Self {
        self.auto_load_path = Some(path.into());
        self
    }

    pub fn build(self) -> PatronRegistry {
        let ids = match self.rng {
            Some(rng) => IdAllocator::with_rng(rng),
            None => IdAllocator::new(),
        }
        .with_max_attempts(self.max_id_attempts);

        let mut registry = PatronRegistry {
            patrons: Vec::new(),
            ids,
            sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
        };

        if let Some(path) = self.auto_load_path {
            registry.auto_load(path);
        }
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
