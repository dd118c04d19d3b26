//! Command-line interface definition using clap.

use clap::Parser;

use cmdfolder::config::{PROMPT_ENV, TAG_ENV};
use cmdfolder::ShellConfig;

/// darkcli - navigable folders of commands
#[derive(Parser, Debug)]
#[command(name = "darkcli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Tag shown in brackets in the prompt
    #[arg(short, long, env = TAG_ENV)]
    pub tag: Option<String>,

    /// Prompt template; `{path}` marks where the folder path goes
    #[arg(short, long, env = PROMPT_ENV)]
    pub prompt: Option<String>,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Shell settings, with flags taking precedence over defaults.
    pub fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig::default();
        if let Some(tag) = &self.tag {
            config = config.with_tag(tag);
        }
        if let Some(prompt) = &self.prompt {
            config = config.with_prompt(prompt);
        }
        config
    }
}
