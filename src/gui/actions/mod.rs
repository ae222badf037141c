// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, poll_load, export}.

mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use export::export;
pub use load::{load, poll_load};
