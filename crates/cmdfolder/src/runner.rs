//! The interactive run-loop.
//!
//! Navigation is an explicit stack of frames rather than call-stack
//! recursion: `cd <name>` pushes a frame, `..` and end-of-input pop one, and
//! popping past the folder the run started from ends the run. The active
//! folder is found by walking the frame names down from that folder.

use tracing::{debug, info, trace};

use crate::config::ShellConfig;
use crate::folder::Folder;
use crate::prompt::PromptTemplate;
use crate::term::{LineIo, ReadLine, Terminal};
use crate::{FolderError, Result};

/// Line that ascends one level.
pub const ASCEND: &str = "..";

/// Prefix of the line that descends into a subfolder.
pub const DESCEND_PREFIX: &str = "cd ";

/// Message written when `cd` names no subfolder of the active folder.
pub const NOT_FOUND: &str = "Folder not found";

impl Folder {
    /// Runs this folder as the top level of an interactive shell on the
    /// process terminal, configured from the environment.
    pub fn run(&mut self) -> Result<()> {
        self.run_with_config(&ShellConfig::from_env())
    }

    /// Runs this folder on the process terminal with `config`.
    ///
    /// The terminal is acquired once here and released when this returns,
    /// however the run ended.
    pub fn run_with_config(&mut self, config: &ShellConfig) -> Result<()> {
        let template = config.template()?;
        let mut term = Terminal::acquire()?;
        info!(tag = %config.tag, "shell started");
        let result = self.run_with_term(template, &mut term);
        info!(ok = result.is_ok(), "shell finished");
        result
    }

    /// Runs this folder on `term`, starting from `template`.
    ///
    /// Returns when this folder is ascended out of (`..` or end-of-input at
    /// this level), or with the first error raised by the terminal or a
    /// command handler.
    pub fn run_with_term(&mut self, template: PromptTemplate, term: &mut dyn LineIo) -> Result<()> {
        Session::new(self, template).run(term)
    }
}

/// A folder entered below the one the run started from.
struct Frame {
    name: String,
    template: PromptTemplate,
}

enum Flow {
    Continue,
    Exit,
}

struct Session<'a> {
    root: &'a mut Folder,
    root_template: PromptTemplate,
    frames: Vec<Frame>,
}

impl<'a> Session<'a> {
    fn new(root: &'a mut Folder, root_template: PromptTemplate) -> Self {
        Self {
            root,
            root_template,
            frames: Vec::new(),
        }
    }

    fn run(mut self, term: &mut dyn LineIo) -> Result<()> {
        term.set_prompt(&self.template().prompt());
        loop {
            let flow = match term.read_line()? {
                ReadLine::EndOfInput(partial) => {
                    term.write_raw(partial.as_bytes())?;
                    term.write_raw(b"\n")?;
                    self.ascend(term)
                }
                ReadLine::Interrupted => {
                    trace!("interrupt ignored");
                    Flow::Continue
                }
                ReadLine::Line(line) => self.dispatch(&line, term)?,
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, line: &str, term: &mut dyn LineIo) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if line == ASCEND {
            return Ok(self.ascend(term));
        }
        if let Some(name) = line.strip_prefix(DESCEND_PREFIX).filter(|n| !n.is_empty()) {
            self.descend(name, term)?;
            return Ok(Flow::Continue);
        }

        if self.active()?.invoke(line, line, term)? {
            debug!(command = line, path = %self.path(), "command finished");
        } else {
            debug!(line, "no matching command");
            term.write_raw(line.as_bytes())?;
            term.write_raw(b"\n")?;
        }
        Ok(Flow::Continue)
    }

    fn descend(&mut self, name: &str, term: &mut dyn LineIo) -> Result<()> {
        if self.active()?.subfolder(name).is_none() {
            debug!(folder = name, path = %self.path(), "folder not found");
            return term.write_line(NOT_FOUND);
        }

        let template = self.template().descend(name);
        term.set_prompt(&template.prompt());
        self.frames.push(Frame {
            name: name.to_string(),
            template,
        });
        info!(path = %self.path(), "entered folder");
        Ok(())
    }

    fn ascend(&mut self, term: &mut dyn LineIo) -> Flow {
        match self.frames.pop() {
            Some(frame) => {
                info!(from = %frame.name, path = %self.path(), "left folder");
                term.set_prompt(&self.template().prompt());
                Flow::Continue
            }
            None => Flow::Exit,
        }
    }

    /// Template of the active folder.
    fn template(&self) -> &PromptTemplate {
        self.frames
            .last()
            .map_or(&self.root_template, |frame| &frame.template)
    }

    /// The active folder.
    fn active(&mut self) -> Result<&mut Folder> {
        let path = self.path();
        self.frames
            .iter()
            .try_fold(&mut *self.root, |folder, frame| folder.subfolder_mut(&frame.name))
            .ok_or(FolderError::Detached(path))
    }

    /// Path of the active folder relative to where the run started.
    fn path(&self) -> String {
        if self.frames.is_empty() {
            return "/".to_string();
        }
        self.frames.iter().map(|f| format!("/{}", f.name)).collect()
    }
}
