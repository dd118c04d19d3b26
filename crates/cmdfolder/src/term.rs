//! Line terminals the run-loop reads from and writes to.
//!
//! The run-loop only needs four things from a terminal: set the prompt, read
//! one line, write raw bytes, and be released when the run ends. [`LineIo`]
//! captures that contract. [`Terminal`] is the interactive implementation on
//! top of rustyline; [`ScriptedTerm`] replays queued input and records output,
//! which is how the shell is driven headlessly and in tests.

use std::collections::VecDeque;
use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, trace};

use crate::{FolderError, Result};

/// Outcome of reading one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A complete line, without its terminator.
    Line(String),
    /// Input ended. Carries whatever partial text was pending (may be empty).
    EndOfInput(String),
    /// The user interrupted the read (Ctrl-C).
    Interrupted,
}

/// Line-oriented input/output shared by every level of a run.
pub trait LineIo {
    /// Sets the prompt shown for subsequent reads.
    fn set_prompt(&mut self, prompt: &str);

    /// Blocks until a line, end-of-input, or an interrupt is available.
    fn read_line(&mut self) -> Result<ReadLine>;

    /// Writes bytes to the output unchanged.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_raw(text.as_bytes())?;
        self.write_raw(b"\n")
    }
}

/// Interactive terminal bound to the process's stdin/stdout.
///
/// Raw mode is only held by rustyline while a read is in progress, so
/// dropping the terminal is all it takes to release it.
pub struct Terminal {
    editor: DefaultEditor,
    prompt: String,
}

impl Terminal {
    /// Acquires the process terminal.
    pub fn acquire() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        debug!("terminal acquired");
        Ok(Self {
            editor,
            prompt: String::new(),
        })
    }
}

impl LineIo for Terminal {
    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    fn read_line(&mut self) -> Result<ReadLine> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(ReadLine::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::EndOfInput(String::new())),
            Err(err) => Err(FolderError::Terminal(err.to_string())),
        }
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        debug!("terminal released");
    }
}

/// Terminal that replays queued read outcomes and captures everything written.
///
/// Once the queue is drained every read reports end-of-input with no pending
/// text, so a run over a script always terminates.
#[derive(Debug, Default)]
pub struct ScriptedTerm {
    input: VecDeque<ReadLine>,
    output: Vec<u8>,
    prompts: Vec<String>,
}

impl ScriptedTerm {
    /// Creates a terminal that will read `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_outcomes(lines.into_iter().map(|l| ReadLine::Line(l.into())))
    }

    /// Creates a terminal that will produce `outcomes` in order.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = ReadLine>) -> Self {
        Self {
            input: outcomes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queues one more read outcome.
    pub fn push(&mut self, outcome: ReadLine) {
        self.input.push_back(outcome);
    }

    /// Everything written so far, decoded lossily.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Every prompt set so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// The prompt currently set, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.prompts.last().map(String::as_str)
    }

    /// Number of queued outcomes not yet read.
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl LineIo for ScriptedTerm {
    fn set_prompt(&mut self, prompt: &str) {
        self.prompts.push(prompt.to_string());
    }

    fn read_line(&mut self) -> Result<ReadLine> {
        let outcome = self
            .input
            .pop_front()
            .unwrap_or_else(|| ReadLine::EndOfInput(String::new()));
        trace!(?outcome, "scripted read");
        Ok(outcome)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }
}
