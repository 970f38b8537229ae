//! UI layer for desktop GUI: app shell and customer cards.

pub mod app;
pub mod card;

pub use app::PlaytimeApp;
