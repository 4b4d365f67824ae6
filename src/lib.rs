//! # Pointage - Badge punch tracking from the terminal
//!
//! A command-line companion for the company badge portal: weekly clock
//! data, absence management and desktop widget snapshots.
//!
//! ## Features
//!
//! - **Weekly Dashboard**: Per-day punch table, totals, progress and pace
//! - **Today View**: Punch list, pauses, amplitude and a day timeline
//! - **Absence Management**: Declare day or half-day absences locally
//! - **Preference Sync**: Theme and weekly objective pushed to the portal
//! - **Widget Snapshots**: Flat JSON projections for an external renderer
//! - **Watch Mode**: Periodic refresh loop with change-gated publishing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pointage::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
