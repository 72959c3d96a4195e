/// The answer record and its choice vocabularies.
pub mod answers;

/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Environment configuration loading.
pub mod config;

/// Constants used throughout the wizard.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// Answer validators and input normalization.
pub mod validation;

/// The questionnaire decision tree.
pub mod wizard;
