//! Brainstorming state: the current idea's hooks and the guides
//! generated for them so far.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::generator::{Completion, Generator};

pub const MIN_IDEA_CHARS: usize = 10;
pub const MAX_IDEA_CHARS: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdeaError {
    #[error("Please enter a reel idea of at least 10 characters.")]
    TooShort,
    #[error("Reel idea cannot be longer than 200 characters.")]
    TooLong,
}

/// A reel idea that passed length validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelIdea(String);

impl ReelIdea {
    /// Validate an idea's length.
    ///
    /// Surrounding whitespace is trimmed before counting, so padding cannot
    /// push a too-short idea over the minimum. Length is in characters.
    pub fn parse(text: &str) -> Result<Self, IdeaError> {
        let idea = text.trim();
        let len = idea.chars().count();
        if len < MIN_IDEA_CHARS {
            return Err(IdeaError::TooShort);
        }
        if len > MAX_IDEA_CHARS {
            return Err(IdeaError::TooLong);
        }
        Ok(Self(idea.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user-facing, non-fatal failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const HOOKS_FAILED: Notice = Notice {
        title: "Error Generating Hooks",
        description: "There was a problem generating hooks for your idea. Please try again.",
    };

    pub const DESCRIPTION_FAILED: Notice = Notice {
        title: "Error Generating Description",
        description: "There was a problem generating the detailed description. Please try again.",
    };
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

pub struct Session<C> {
    generator: Generator<C>,
    hooks: Vec<String>,
    descriptions: HashMap<String, String>,
}

impl<C: Completion> Session<C> {
    pub fn new(generator: Generator<C>) -> Self {
        Self {
            generator,
            hooks: Vec::new(),
            descriptions: HashMap::new(),
        }
    }

    pub fn hooks(&self) -> &[String] {
        &self.hooks
    }

    /// Hook by its zero-based position in the current list.
    pub fn hook(&self, index: usize) -> Option<&str> {
        self.hooks.get(index).map(String::as_str)
    }

    /// Replace the current hooks with a fresh set for `idea`.
    ///
    /// Previous hooks and guides are discarded before the request, so a
    /// failure leaves the session empty.
    pub fn generate_hooks(&mut self, idea: &ReelIdea) -> Result<&[String], Notice> {
        self.hooks.clear();
        self.descriptions.clear();

        match self.generator.generate_hooks(idea.as_str()) {
            Ok(hooks) => {
                self.hooks = hooks;
                Ok(&self.hooks)
            }
            Err(e) => {
                tracing::error!(error = %e, "hook generation failed");
                Err(Notice::HOOKS_FAILED)
            }
        }
    }

    /// The guide for `hook`, generated on first request and cached after.
    ///
    /// A failed request caches nothing, so asking again retries it.
    pub fn describe(&mut self, hook: &str) -> Result<&str, Notice> {
        if !self.descriptions.contains_key(hook) {
            match self.generator.generate_description(hook) {
                Ok(description) => {
                    self.descriptions.insert(hook.to_string(), description);
                }
                Err(e) => {
                    tracing::error!(error = %e, %hook, "description generation failed");
                    return Err(Notice::DESCRIPTION_FAILED);
                }
            }
        } else {
            tracing::debug!(%hook, "using cached description");
        }

        self.descriptions
            .get(hook)
            .map(String::as_str)
            .ok_or(Notice::DESCRIPTION_FAILED)
    }
}
