//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`bench`] - Guarded vs unconditional trace call timing
//! - [`config`] - Configuration management (path, show, init)
//! - [`emit`] - Send one record through the configured registry
//! - [`resolve`] - Show which binding serves a category

pub mod bench;
pub mod config;
pub mod emit;
pub mod resolve;

use catlog::log::Category;

/// Category label for terminal output, naming the root explicitly.
pub fn display_category(category: &Category) -> String {
    if category.is_root() {
        "(root)".to_string()
    } else {
        category.to_string()
    }
}
