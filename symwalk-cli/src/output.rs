//! Record output in text or JSON form.
//!
//! Every record is a code and an absolute path. Text output prints
//! `<code> <path>` per line; JSON output prints one object per line.

use serde::Serialize;
use std::io::Write;
use symwalk::{OutputFormat, PathEntity, PathOutcome, StdFileSystem, WalkReport};

use crate::error::CliError;

/// What a record says about its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// An existing directory.
    Dir,
    /// An existing non-directory.
    File,
    /// Rejected by an exclude pattern.
    Excluded,
    /// Met more than once.
    Duplicate,
    /// A symlink that loops back on its own chain.
    Recursive,
    /// A symlink whose target does not exist.
    Broken,
    /// A path that does not exist.
    Missing,
}

/// One output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Record kind.
    pub kind: RecordKind,
    /// Absolute path.
    pub path: String,
    /// Times the path was met, for duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<usize>,
}

impl Record {
    fn new(kind: RecordKind, entity: &PathEntity) -> Self {
        Self {
            kind,
            path: entity.to_string(),
            hits: None,
        }
    }

    /// A `d` or `f` record for an existing path.
    pub fn entry(entity: &PathEntity) -> Self {
        let kind = if entity.is_dir(&StdFileSystem) {
            RecordKind::Dir
        } else {
            RecordKind::File
        };
        Self::new(kind, entity)
    }

    /// The record for a single-path resolution.
    pub fn outcome(outcome: &PathOutcome) -> Self {
        match outcome {
            PathOutcome::Resolved(e) => Self::entry(e),
            PathOutcome::Missing(e) => Self::new(RecordKind::Missing, e),
            PathOutcome::BrokenLink(e) => Self::new(RecordKind::Broken, e),
            PathOutcome::RecursiveLink(e) => Self::new(RecordKind::Recursive, e),
        }
    }

    /// The text code: `d`, `f`, `x`, `u<N>`, `r`, `b` or `m`.
    pub fn code(&self) -> String {
        match self.kind {
            RecordKind::Dir => "d".to_string(),
            RecordKind::File => "f".to_string(),
            RecordKind::Excluded => "x".to_string(),
            RecordKind::Duplicate => format!("u{}", self.hits.unwrap_or(0)),
            RecordKind::Recursive => "r".to_string(),
            RecordKind::Broken => "b".to_string(),
            RecordKind::Missing => "m".to_string(),
        }
    }
}

/// Summary records for a finished walk, each group sorted.
///
/// Order: excluded, duplicates, recursive links, broken links, missing.
pub fn report_records(report: &WalkReport) -> Vec<Record> {
    let mut records: Vec<Record> = report
        .sorted_skipped()
        .into_iter()
        .map(|e| Record::new(RecordKind::Excluded, e))
        .collect();
    records.extend(report.duplicates().into_iter().map(|(e, hits)| Record {
        hits: Some(hits),
        ..Record::new(RecordKind::Duplicate, e)
    }));
    let groups = [
        (RecordKind::Recursive, report.sorted_recursive_links()),
        (RecordKind::Broken, report.sorted_broken_links()),
        (RecordKind::Missing, report.sorted_missing()),
    ];
    for (kind, paths) in groups {
        records.extend(paths.into_iter().map(|e| Record::new(kind, e)));
    }
    records
}

/// Writes records in the configured format.
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one record.
    pub fn write(&mut self, record: &Record) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{} {}", record.code(), record.path)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Write all summary records for a report.
    pub fn write_report(&mut self, report: &WalkReport) -> Result<(), CliError> {
        for record in report_records(report) {
            self.write(&record)?;
        }
        Ok(())
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> Result<W, CliError> {
        self.out.flush()?;
        Ok(self.out)
    }
}
