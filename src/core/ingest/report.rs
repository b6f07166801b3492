//! Ingestion summary and reporting

use super::parse::LineRejection;

/// A line that was not loaded
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the source
    pub line_number: usize,

    /// Raw line as read
    pub line: String,

    /// Why the line was skipped
    pub reason: LineRejection,
}

/// Summary of one ingestion batch
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    /// Path or label of the data source
    pub source: String,

    /// Number of patrons added
    pub loaded: usize,

    /// Lines that were skipped, in file order
    pub skipped: Vec<SkippedLine>,
}

impl IngestReport {
    /// Create a new empty report for a source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            loaded: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a skipped line
    pub fn add_skipped(&mut self, line_number: usize, line: &str, reason: LineRejection) {
        self.skipped.push(SkippedLine {
            line_number,
            line: line.to_string(),
            reason,
        });
    }

    /// Total lines seen, loaded or skipped
    pub fn total_lines(&self) -> usize {
        self.loaded + self.skipped.len()
    }

    /// Number of skipped lines that were malformed rather than invalid
    pub fn format_errors(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| s.reason.is_format_error())
            .count()
    }

    /// True when every line was loaded
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_ingest_complete!(&self.source, self.loaded, self.skipped.len());

        if !self.is_clean() {
            tracing::warn!(
                source = %self.source,
                total_lines = self.total_lines(),
                skipped = self.skipped.len(),
                format_errors = self.format_errors(),
                "Ingestion completed with skipped lines"
            );
        }
    }
}
