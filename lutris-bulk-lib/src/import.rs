//! The scan-and-write loop of an import run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::ImportError;
use crate::record::{GameRecord, RecordBuilder};
use crate::sink::GameSink;

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Id range assigned to the imported games, inclusive.
    pub ids: Option<(i64, i64)>,
}

/// Build and write a record for every file, stamping each with the current
/// UTC time.
///
/// Files are processed in order; the first error stops the run.
pub fn run_import<S: GameSink + ?Sized>(
    builder: &mut RecordBuilder,
    files: &BTreeSet<PathBuf>,
    sink: &mut S,
    on_record: &mut dyn FnMut(&GameRecord),
) -> Result<ImportSummary, ImportError> {
    run_import_with_clock(builder, files, sink, on_record, || {
        chrono::Utc::now().timestamp()
    })
}

/// Same as [`run_import`] with an explicit timestamp source.
pub fn run_import_with_clock<S, C>(
    builder: &mut RecordBuilder,
    files: &BTreeSet<PathBuf>,
    sink: &mut S,
    on_record: &mut dyn FnMut(&GameRecord),
    mut clock: C,
) -> Result<ImportSummary, ImportError>
where
    S: GameSink + ?Sized,
    C: FnMut() -> i64,
{
    let mut summary = ImportSummary::default();

    for file in files {
        let record = builder.build(file, clock())?;
        sink.write(&record)?;
        on_record(&record);

        summary.imported += 1;
        summary.ids = Some(match summary.ids {
            Some((first, _)) => (first, record.id()),
            None => (record.id(), record.id()),
        });
    }

    Ok(summary)
}
