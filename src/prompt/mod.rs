//! Interactive prompt utilities for user input
//!
//! This module provides a modular approach to handling the prompt
//! primitives the wizard consumes: text input, choices, confirmations, and
//! informational displays.
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Predefined-response implementation for automation and tests

use crate::prompt::dialoguer::DialoguerPrompter;

pub mod dialoguer;
pub mod interface;
pub mod scripted;

// Re-export the interfaces for easy access
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
