//! Hierarchical command shells.
//!
//! A shell is a tree of [`Folder`]s. Each folder holds named commands and
//! named child folders. At the prompt, a line equal to a command name runs
//! that command, `cd <name>` enters a child folder, and `..` returns to the
//! parent. The prompt shows the path of the active folder.
//!
//! # Example
//!
//! ```no_run
//! use cmdfolder::Folder;
//!
//! let mut logs = Folder::new();
//! logs.add_command("tail", |_line, term| term.write_line("nothing new"));
//!
//! let mut root = Folder::new();
//! root.add_command("status", |_line, term| term.write_line("all good"));
//! root.add_folder("logs", logs);
//!
//! // Blocks on the terminal until the user leaves the top-level folder
//! root.run().expect("shell failed");
//! ```
//!
//! # Driving a shell without a terminal
//!
//! ```
//! use cmdfolder::{Folder, PromptTemplate, ScriptedTerm};
//!
//! let mut root = Folder::new();
//! root.add_folder("logs", Folder::new());
//!
//! let mut term = ScriptedTerm::new(["ls", "cd logs", ".."]);
//! root.run_with_term(PromptTemplate::new("~{path} %").unwrap(), &mut term)
//!     .unwrap();
//!
//! assert_eq!(term.output(), "logs\n\n");
//! ```

pub mod config;
pub mod error;
pub mod folder;
pub mod prompt;
pub mod runner;
pub mod term;

pub use config::ShellConfig;
pub use error::{FolderError, Result};
pub use folder::{Folder, Handler};
pub use prompt::{Identity, PromptTemplate};
pub use term::{LineIo, ReadLine, ScriptedTerm, Terminal};
