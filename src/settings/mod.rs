//! Configuration structures for packaging operations.
//!
//! [`Settings`] is constructed through [`SettingsBuilder`], usually from the
//! parsed command line.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use core::{DEFAULT_INTERPRETER, DEFAULT_PACKAGE_DIR, Settings, VersionSource};
