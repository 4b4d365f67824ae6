//! Core library modules for the pointage application.
//!
//! Serves as the main entry point for all pointage library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Time Engine**: Minute arithmetic, punch segmentation, week keys
//! - **Aggregation**: Day and week metrics from one immutable context
//! - **User Interface**: Console tables, progress bars, day timeline
//! - **Widget Publishing**: Snapshot projection with change gating
//! - **Secure Storage**: Encrypted password cache, per-login state
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pointage::libs::summary::WeekContext;
//! use pointage::libs::day::AbsenceMap;
//! use std::collections::HashMap;
//!
//! let now = chrono::Local::now().naive_local();
//! let context = WeekContext::new(HashMap::new(), AbsenceMap::new(), 2280, now);
//! assert_eq!(context.total_paid(), "00:00");
//! ```

pub mod blocks;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod messages;
pub mod payload;
pub mod refresh;
pub mod secret;
pub mod store;
pub mod summary;
pub mod theme;
pub mod timemath;
pub mod view;
pub mod week;
pub mod widget;
