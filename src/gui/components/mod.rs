// src/gui/components/mod.rs
pub mod board;
pub mod overlay;
pub mod toolbar;
