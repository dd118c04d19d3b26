//! Shell configuration.
//!
//! # Environment Variables
//!
//! - `CMDFOLDER_TAG`: Tag shown in brackets in the default prompt
//! - `CMDFOLDER_PROMPT`: Full prompt template override; must contain `{path}`

use crate::prompt::{Identity, PromptTemplate};
use crate::Result;

/// Environment variable for the prompt tag.
pub const TAG_ENV: &str = "CMDFOLDER_TAG";

/// Environment variable for a prompt template override.
pub const PROMPT_ENV: &str = "CMDFOLDER_PROMPT";

/// Tag used when none is configured.
pub const DEFAULT_TAG: &str = "darkcli";

/// Settings for a top-level run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Tag shown in brackets in the default prompt.
    pub tag: String,
    /// Template used instead of the default styled prompt.
    pub prompt: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            prompt: None,
        }
    }
}

impl ShellConfig {
    /// Loads settings from the environment, using defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tag: lookup(TAG_ENV)
                .filter(|t| !t.is_empty())
                .unwrap_or(defaults.tag),
            prompt: lookup(PROMPT_ENV).filter(|p| !p.is_empty()),
        }
    }

    /// Sets the prompt tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets a prompt template override.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// The top-level prompt template: the override if set, otherwise the
    /// styled default for the current user and host.
    pub fn template(&self) -> Result<PromptTemplate> {
        match &self.prompt {
            Some(text) => PromptTemplate::new(text),
            None => PromptTemplate::styled(&Identity::current(), &self.tag),
        }
    }
}
