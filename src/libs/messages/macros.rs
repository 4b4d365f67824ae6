//! Messaging macros with automatic debug-mode routing.
//!
//! All terminal output goes through these macros. They pick the output
//! channel at runtime: when debug mode is on, messages go through the
//! `tracing` subscriber with proper levels; otherwise they go straight to
//! stdout/stderr as plain lines. Command code therefore never chooses
//! between `println!` and `tracing::info!` itself.
//!
//! ## Debug Mode
//!
//! Debug mode is on when either environment variable is set:
//! - `POINTAGE_DEBUG`: application-specific switch
//! - `RUST_LOG`: standard Rust logging configuration
//!
//! The check is cached in a `OnceLock` after the first call, so the macros
//! stay cheap inside refresh loops.
//!
//! ## Macro Set
//!
//! - `msg_print!`: bare message, no prefix
//! - `msg_success!` / `msg_info!` / `msg_warning!`: prefixed status lines
//! - `msg_error!`: prefixed, goes to stderr outside debug mode
//! - `msg_debug!`: only visible in debug mode
//! - `msg_error_anyhow!` / `msg_bail_anyhow!`: build or return an
//!   `anyhow::Error` carrying the rendered message
//!
//! Each display macro accepts an optional trailing `true` argument that
//! wraps the line in blank lines for section-style output.
//!
//! ## Examples
//!
//! ```rust
//! use pointage::{msg_success, msg_error, msg_bail_anyhow};
//! use pointage::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_error!(Message::NoCachedData);
//!
//! fn check(theme_known: bool) -> anyhow::Result<()> {
//!     if !theme_known {
//!         msg_bail_anyhow!(Message::UnknownTheme("neon".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::OnceLock;

/// Cached result of the environment check; looked up once per process.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should route through the tracing subscriber.
///
/// True when `POINTAGE_DEBUG` or `RUST_LOG` is set. The first call decides
/// for the lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("POINTAGE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message, routed by debug mode.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix. Outside debug mode the
/// message goes to stderr so scripts can separate it from data output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message with a 🔍 prefix. Completely silent outside debug
/// mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message, with the ❌ prefix baked in.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early-returns an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
