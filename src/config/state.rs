// src/config/state.rs
//
// AppState: the single owner of everything the viewer knows.
//
// Only `finish_load` replaces the student list, and it replaces it whole.
// Search, sort and the overlay are plain fields the front-end edits; the
// display list is derived from them on demand.

use super::options::{SheetSource, ViewOptions};
use crate::{
    error::LoadError,
    overlay::Overlay,
    sheet::LoadOutcome,
    students::StudentAggregate,
    view::{display_list, SortMode, StudentView},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// Last fetch produced data.
    Loaded { rows: usize, students: usize },
    /// Last fetch succeeded but the sheet had no data rows.
    NoData,
    /// Last fetch failed; the message is untrusted text.
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub source: SheetSource,
    pub view: ViewOptions,
    pub overlay: Overlay,
    students: Vec<StudentAggregate>,
    status: LoadStatus,
}

impl AppState {
    pub fn new(source: SheetSource) -> Self {
        Self { source, ..Self::default() }
    }

    /// Students from the last successful load (empty before the first).
    pub fn students(&self) -> &[StudentAggregate] {
        &self.students
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Mark a fetch as started. Returns false if one is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            logd!("State: load already in flight, ignoring");
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Apply the result of a fetch.
    pub fn finish_load(&mut self, result: Result<LoadOutcome, LoadError>) {
        match result {
            Ok(LoadOutcome::Loaded { students, rows }) => {
                self.status = LoadStatus::Loaded { rows, students: students.len() };
                self.students = students;
            }
            Ok(LoadOutcome::NoData) => {
                self.status = LoadStatus::NoData;
                self.students.clear();
            }
            Err(e) => {
                // Keep whatever was loaded before.
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        logf!("State: {:?} (students={})", self.status, self.students.len());
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.view.sort = sort;
    }

    /// Current display list.
    pub fn display(&self) -> StudentView<'_> {
        display_list(&self.students, &self.view.search, self.view.sort)
    }
}
