//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, SingleChoiceConfig, TextPromptConfig,
};
use crate::error::Result;
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn print_hint(&self, hint: &Option<String>) {
        if let Some(hint) = hint {
            eprintln!("{}", style(hint).dim());
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.print_hint(&config.hint);

        let mut prompt = config.prompt.clone();
        if let Some(placeholder) = &config.placeholder {
            prompt = format!("{prompt} {}", style(format!("({placeholder})")).dim());
        }

        let mut input = Input::new().with_prompt(prompt);
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        if config.allow_empty {
            input = input.allow_empty(true);
        }
        if let Some(validator) = config.validate {
            input = input.validate_with(move |value: &String| validator(value));
        }

        Ok(input.interact_text()?)
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        Ok(select.interact()?)
    }
}

impl super::interface::MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let indices = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact()?;

        Ok(indices)
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.print_hint(&config.hint);

        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}

impl super::interface::InfoDisplay for DialoguerPrompter {
    fn show_info(&self, message: &str) -> Result<()> {
        eprintln!();
        for line in message.lines() {
            eprintln!("  {}", style(line).cyan());
        }
        eprintln!();
        Ok(())
    }
}
