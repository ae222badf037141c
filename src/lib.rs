// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod html;
pub mod overlay;
pub mod progress;
pub mod render;
pub mod sheet;
pub mod students;
pub mod view;
