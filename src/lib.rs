//! Terminal portfolio shell: a decrypting splash intro, directional page
//! transitions, and persisted display preferences.

pub mod config;
pub mod logging;
pub mod schedule;
pub mod ui;
