//! SQLite layer for locally declared data.
//!
//! The badge portal only reports punches; declared absences exist purely on
//! this machine. They live in a small SQLite database in the shared data
//! directory, keyed by portal login so several accounts can coexist without
//! stepping on each other.

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file in the application
/// data directory.
pub mod db;

/// Declared absence storage.
///
/// Persists per-day absence declarations (full day, morning, afternoon)
/// and materializes them into the map the dashboard engine consumes.
pub mod absences;
