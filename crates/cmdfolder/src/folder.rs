//! Folder nodes: named commands plus named child folders.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::trace;

use crate::term::LineIo;
use crate::Result;

/// Name the built-in listing command is registered under.
pub const LS: &str = "ls";

/// A command handler.
///
/// Receives the full input line that triggered it, so one handler can be
/// registered under several names and branch on the text, plus the terminal
/// of the active run. Returning an error ends the run.
pub type Handler = Box<dyn FnMut(&str, &mut dyn LineIo) -> Result<()>>;

enum Command {
    /// Lists the owning folder's subfolders.
    Ls,
    Handler(Handler),
}

/// One node of a command tree.
///
/// A folder owns its children, so a folder can never end up as its own
/// descendant. Build the whole tree before running it:
///
/// ```
/// use cmdfolder::Folder;
///
/// let mut logs = Folder::new();
/// logs.add_command("tail", |_line, term| term.write_line("last lines"));
///
/// let mut root = Folder::new();
/// root.add_command("status", |_line, term| term.write_line("ok"))
///     .add_folder("logs", logs);
///
/// assert!(root.has_command("status"));
/// assert_eq!(root.subfolder_names(), vec!["logs"]);
/// ```
pub struct Folder {
    commands: HashMap<String, Command>,
    subfolders: BTreeMap<String, Folder>,
}

impl Folder {
    /// Creates an empty folder with the built-in `ls` registered.
    pub fn new() -> Self {
        let mut commands = HashMap::new();
        commands.insert(LS.to_string(), Command::Ls);
        Self {
            commands,
            subfolders: BTreeMap::new(),
        }
    }

    /// Registers `handler` under `name`, replacing any previous command of
    /// that name (including the built-in `ls`).
    pub fn add_command<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: FnMut(&str, &mut dyn LineIo) -> Result<()> + 'static,
    {
        self.commands
            .insert(name.into(), Command::Handler(Box::new(handler)));
        self
    }

    /// Adds `child` under `name`, replacing any previous subfolder of that name.
    pub fn add_folder(&mut self, name: impl Into<String>, child: Folder) -> &mut Self {
        self.subfolders.insert(name.into(), child);
        self
    }

    /// The default `ls`: writes each subfolder name on its own line, sorted.
    pub fn ls(&self, _line: &str, term: &mut dyn LineIo) -> Result<()> {
        write_names(&self.subfolders, term)
    }

    /// Returns true if a command is registered under `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The subfolder registered under `name`.
    pub fn subfolder(&self, name: &str) -> Option<&Folder> {
        self.subfolders.get(name)
    }

    pub(crate) fn subfolder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.subfolders.get_mut(name)
    }

    /// Subfolder names, sorted.
    pub fn subfolder_names(&self) -> Vec<&str> {
        self.subfolders.keys().map(String::as_str).collect()
    }

    /// Runs the command registered under `name` with `line` as its argument.
    ///
    /// Returns `Ok(false)` without side effects when nothing is registered
    /// under `name`.
    pub fn invoke(&mut self, name: &str, line: &str, term: &mut dyn LineIo) -> Result<bool> {
        match self.commands.get_mut(name) {
            Some(Command::Ls) => {
                trace!(command = name, "running built-in ls");
                write_names(&self.subfolders, term)?;
                Ok(true)
            }
            Some(Command::Handler(handler)) => {
                trace!(command = name, "running handler");
                handler(line, term)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for Folder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Folder")
            .field("commands", &self.command_names())
            .field("subfolders", &self.subfolders)
            .finish()
    }
}

fn write_names(subfolders: &BTreeMap<String, Folder>, term: &mut dyn LineIo) -> Result<()> {
    for name in subfolders.keys() {
        term.write_line(name)?;
    }
    Ok(())
}
