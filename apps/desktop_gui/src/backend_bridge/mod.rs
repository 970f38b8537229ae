//! Bridge between the UI thread and the backend worker that talks to the directory.

pub mod commands;
pub mod runtime;
