//! Prompt templates and the default styled prompt.
//!
//! A template carries exactly one `{path}` placeholder. Descending into a
//! folder appends `/<name>` in front of the placeholder, so the child's
//! template still has one and the breadcrumb grows with each level:
//!
//! ```
//! use cmdfolder::PromptTemplate;
//!
//! let root = PromptTemplate::new("~{path} %").unwrap();
//! let logs = root.descend("logs");
//! assert_eq!(root.prompt(), "~ % ");
//! assert_eq!(logs.prompt(), "~/logs % ");
//! assert_eq!(logs.descend("today").prompt(), "~/logs/today % ");
//! ```

use std::fmt;
use std::process::Command;

use crossterm::style::Stylize;

use crate::{FolderError, Result};

/// Placeholder standing for the accumulated navigation path.
pub const PLACEHOLDER: &str = "{path}";

/// Fallback for an identity field that could not be resolved.
const UNKNOWN: &str = "unknown";

/// A prompt with one slot for the navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    head: String,
    tail: String,
}

impl PromptTemplate {
    /// Parses `text`, which must contain [`PLACEHOLDER`] exactly once.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        match text.matches(PLACEHOLDER).count() {
            1 => {
                let (head, tail) = text.split_once(PLACEHOLDER).ok_or_else(|| {
                    FolderError::InvalidPrompt(format!("missing {}", PLACEHOLDER))
                })?;
                Ok(Self {
                    head: head.to_string(),
                    tail: tail.to_string(),
                })
            }
            0 => Err(FolderError::InvalidPrompt(format!(
                "'{}' has no {} placeholder",
                text, PLACEHOLDER
            ))),
            n => Err(FolderError::InvalidPrompt(format!(
                "'{}' has {} {} placeholders, expected one",
                text, n, PLACEHOLDER
            ))),
        }
    }

    /// The default prompt: styled user, `@`, host, styled path, styled
    /// `[tag]`, then a literal `%`.
    ///
    /// Fails only if the identity or tag itself contains the placeholder.
    pub fn styled(identity: &Identity, tag: &str) -> Result<Self> {
        let path = format!("~{}", PLACEHOLDER);
        Self::new(format!(
            "{}@{} {} {}{}{} %",
            identity.username.as_str().blue().bold(),
            identity.hostname,
            path.as_str().white().bold(),
            "[".magenta(),
            tag.green(),
            "]".magenta()
        ))
    }

    /// Substitutes `path` for the placeholder.
    pub fn render(&self, path: &str) -> String {
        format!("{}{}{}", self.head, path, self.tail)
    }

    /// The prompt shown while this template's folder is active.
    pub fn prompt(&self) -> String {
        format!("{} ", self.render(""))
    }

    /// The template for the child folder `name`.
    pub fn descend(&self, name: &str) -> Self {
        Self {
            head: format!("{}/{}", self.head, name),
            tail: self.tail.clone(),
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(PLACEHOLDER))
    }
}

/// Who and where the shell runs, as shown in the default prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub hostname: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
        }
    }

    /// Resolves the current user and host.
    ///
    /// Username comes from `USER` or `USERNAME`; hostname from `HOSTNAME` or
    /// the `hostname` program. Either falls back to `unknown`.
    pub fn current() -> Self {
        let username = env_value(&["USER", "USERNAME"]).unwrap_or_else(|| UNKNOWN.to_string());
        let hostname = env_value(&["HOSTNAME"])
            .or_else(hostname_command)
            .unwrap_or_else(|| UNKNOWN.to_string());
        Self { username, hostname }
    }
}

fn env_value(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn hostname_command() -> Option<String> {
    Command::new("hostname")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_one_placeholder() {
        assert!(PromptTemplate::new("~{path} %").is_ok());
        assert!(matches!(
            PromptTemplate::new("no slot %"),
            Err(FolderError::InvalidPrompt(_))
        ));
        assert!(matches!(
            PromptTemplate::new("{path}{path}"),
            Err(FolderError::InvalidPrompt(_))
        ));
    }

    #[test]
    fn test_render_and_prompt() {
        let template = PromptTemplate::new("user@host ~{path} [x] %").unwrap();
        assert_eq!(template.render("/a"), "user@host ~/a [x] %");
        assert_eq!(template.prompt(), "user@host ~ [x] % ");
    }

    #[test]
    fn test_descend_accumulates_segments() {
        let root = PromptTemplate::new("~{path}%").unwrap();
        let leaf = root.descend("a").descend("b");
        assert_eq!(leaf.prompt(), "~/a/b% ");
        // Parent is untouched
        assert_eq!(root.prompt(), "~% ");
    }

    #[test]
    fn test_descend_name_containing_placeholder_text() {
        let root = PromptTemplate::new("~{path}%").unwrap();
        let odd = root.descend("{path}");
        assert_eq!(odd.prompt(), "~/{path}% ");
        assert_eq!(odd.descend("x").prompt(), "~/{path}/x% ");
    }

    #[test]
    fn test_display_shows_placeholder() {
        let template = PromptTemplate::new("~{path}%").unwrap().descend("logs");
        assert_eq!(template.to_string(), "~/logs{path}%");
        assert_eq!(PromptTemplate::new(template.to_string()).unwrap(), template);
    }

    #[test]
    fn test_styled_prompt_layout() {
        let identity = Identity::new("alice", "box");
        let template = PromptTemplate::styled(&identity, "darkcli").unwrap();

        let prompt = template.prompt();
        assert!(prompt.contains("alice"));
        assert!(prompt.contains("@box "));
        assert!(prompt.contains("darkcli"));
        assert!(prompt.ends_with(" % "));

        let nested = template.descend("logs").prompt();
        assert!(nested.contains("/logs"));
        assert!(nested.ends_with(" % "));
    }

    #[test]
    fn test_styled_rejects_placeholder_in_tag() {
        let identity = Identity::new("alice", "box");
        assert!(PromptTemplate::styled(&identity, "{path}").is_err());
    }

    #[test]
    fn test_current_identity_is_never_empty() {
        let identity = Identity::current();
        assert!(!identity.username.is_empty());
        assert!(!identity.hostname.is_empty());
    }
}
