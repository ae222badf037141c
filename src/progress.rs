// src/progress.rs
/// Lightweight progress reporting for the sheet load.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before any work starts.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
