// src/sheet.rs
//
// Load pipeline: fetch → parse → map → group.
//
// `ingest` is the pure half and is what tests and benches drive. `load`
// adds the network fetch and must only run off the UI thread.

use crate::{
    config::options::SheetSource,
    core::net,
    csv::{parse_rows, rows_to_records},
    error::LoadError,
    progress::Progress,
    students::{group_records, StudentAggregate},
};

/// Result of a load that reached the server and got a body back.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// At least one data row. `rows` counts data rows, not students.
    Loaded { students: Vec<StudentAggregate>, rows: usize },
    /// Header only, or nothing at all.
    NoData,
}

impl LoadOutcome {
    pub fn students(&self) -> &[StudentAggregate] {
        match self {
            LoadOutcome::Loaded { students, .. } => students,
            LoadOutcome::NoData => &[],
        }
    }
}

/// Turn CSV text into grouped students.
pub fn ingest(text: &str) -> LoadOutcome {
    let parsed = parse_rows(text);
    if parsed.len() < 2 {
        logd!("Ingest: {} row(s), no data", parsed.len());
        return LoadOutcome::NoData;
    }

    let records = rows_to_records(&parsed);
    let students = group_records(&records);
    logd!("Ingest: rows={} students={}", records.len(), students.len());

    LoadOutcome::Loaded { students, rows: records.len() }
}

/// Fetch the configured sheet and ingest it.
pub fn load(
    source: &SheetSource,
    progress: Option<&mut dyn Progress>,
) -> Result<LoadOutcome, LoadError> {
    load_url(&source.export_url(), progress)
}

/// Fetch CSV from `url` and ingest it. Failures are reported, not retried.
pub fn load_url(
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<LoadOutcome, LoadError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
        p.log("Fetching sheet…");
    }
    logf!("Load: GET {url}");

    let result = net::http_get(url).map(|text| {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Parsing sheet…");
        }
        ingest(&text)
    });

    match &result {
        Ok(LoadOutcome::Loaded { students, rows }) => {
            logf!("Load: OK rows={rows} students={}", students.len());
        }
        Ok(LoadOutcome::NoData) => logf!("Load: OK, no data rows"),
        Err(e) => loge!("Load: {e}"),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
