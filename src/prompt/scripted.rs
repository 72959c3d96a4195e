//! Scripted prompt provider for non-interactive runs
//!
//! Gives predefined responses without user interaction. Useful for
//! automation, testing, or CI/CD environments. Responses are keyed by
//! prompt label and consumed in order, so prompts that can be asked more
//! than once (the extension retry loop, validated text inputs) can be
//! scripted with a sequence of answers.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, SingleChoiceConfig, TextPromptConfig,
};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Prompt provider that answers from scripted response queues
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    choice_responses: RefCell<HashMap<String, VecDeque<usize>>>,
    multiple_choice_responses: RefCell<HashMap<String, VecDeque<Vec<usize>>>>,
    confirmation_responses: RefCell<HashMap<String, VecDeque<bool>>>,

    // Everything shown or asked, for callers that inspect the interaction
    asked_prompts: RefCell<Vec<String>>,
    info_messages: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queue a text response for a prompt. Repeat to script a sequence.
    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        self.text_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response.to_string());
        self
    }

    /// Queue a single-choice response (by index) for a prompt.
    pub fn with_choice_response(self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(choice_index);
        self
    }

    /// Queue a multiple-choice response (by indices) for a prompt.
    pub fn with_multiple_choice_response(
        self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        self.multiple_choice_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(choice_indices);
        self
    }

    /// Queue a confirmation response for a prompt.
    pub fn with_confirmation_response(self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Every prompt label asked so far, in order.
    pub fn asked_prompts(&self) -> Vec<String> {
        self.asked_prompts.borrow().clone()
    }

    /// Number of times a prompt with this label was asked.
    pub fn times_asked(&self, prompt: &str) -> usize {
        self.asked_prompts.borrow().iter().filter(|p| *p == prompt).count()
    }

    /// Every informational message shown so far, in order.
    pub fn info_messages(&self) -> Vec<String> {
        self.info_messages.borrow().clone()
    }

    /// Number of informational messages containing the given text.
    pub fn times_informed(&self, needle: &str) -> usize {
        self.info_messages.borrow().iter().filter(|m| m.contains(needle)).count()
    }

    fn record_prompt(&self, prompt: &str) {
        self.asked_prompts.borrow_mut().push(prompt.to_string());
    }
}

impl super::interface::TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.record_prompt(&config.prompt);

        let mut responses = self.text_responses.borrow_mut();
        if let Some(queue) = responses.get_mut(&config.prompt) {
            while let Some(candidate) = queue.pop_front() {
                let Some(validator) = config.validate else {
                    return Ok(candidate);
                };
                match validator(&candidate) {
                    Ok(()) => return Ok(candidate),
                    // Re-prompt behavior: try the next scripted submission.
                    Err(message) if !queue.is_empty() => {
                        println!(
                            "Rejected scripted response for '{}': {message}",
                            config.prompt
                        );
                    }
                    Err(message) => return Err(Error::InvalidInput(message)),
                }
            }
        }

        if let Some(default) = &config.default {
            return Ok(default.clone());
        }
        if config.allow_empty {
            return Ok(String::new());
        }
        Err(Error::InvalidInput(format!(
            "no scripted response for '{}'",
            config.prompt
        )))
    }
}

impl super::interface::SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        self.record_prompt(&config.prompt);

        let response = self
            .choice_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .or(config.default_index)
            .unwrap_or(0);

        Ok(response)
    }
}

impl super::interface::MultipleChoicePrompter for ScriptedPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        self.record_prompt(&config.prompt);

        let response = self
            .multiple_choice_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                // Fall back to the items marked as pre-selected defaults
                config
                    .defaults
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| if selected { Some(i) } else { None })
                    .collect()
            });

        Ok(response)
    }
}

impl super::interface::ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.record_prompt(&config.prompt);

        let response = self
            .confirmation_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .unwrap_or(config.default);

        Ok(response)
    }
}

impl super::interface::InfoDisplay for ScriptedPrompter {
    fn show_info(&self, message: &str) -> Result<()> {
        self.info_messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}
