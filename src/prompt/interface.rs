//! Pure interfaces for prompting without external dependencies
//!
//! This module defines abstract interfaces for the prompt primitives the
//! wizard consumes. They are independent of any specific UI library
//! implementation.

use crate::error::Result;

/// Per-submission validator for text input. Returns the message to display
/// when the submitted value is rejected.
pub type TextValidator = fn(&str) -> std::result::Result<(), String>;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub allow_empty: bool,
    pub validate: Option<TextValidator>,
}

impl TextPromptConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
            placeholder: None,
            hint: None,
            allow_empty: false,
            validate: None,
        }
    }
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
    pub hint: Option<String>,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}

/// Abstract interface for multiple choice selection
pub trait MultipleChoicePrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig)
        -> Result<Vec<usize>>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Abstract interface for informational displays with no captured input
pub trait InfoDisplay {
    fn show_info(&self, message: &str) -> Result<()>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider:
    TextPrompter
    + SingleChoicePrompter
    + MultipleChoicePrompter
    + ConfirmationPrompter
    + InfoDisplay
{
}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where
    T: TextPrompter
        + SingleChoicePrompter
        + MultipleChoicePrompter
        + ConfirmationPrompter
        + InfoDisplay
{
}
