//! The demonstration tree served by `darkcli`.
//!
//! ```text
//! /            status, hello, bye, journal
//! ├── logs     tail, clear
//! └── system   whoami, uptime, ls (lists commands too)
//! ```
//!
//! Every command appends to a shared [`Journal`], which is what `status`,
//! `journal` and `logs/tail` report on.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use cmdfolder::{Folder, Identity, LineIo, Result};

/// Number of entries `tail` shows.
const TAIL_LEN: usize = 5;

/// Record of the commands run in this session.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub type SharedJournal = Rc<RefCell<Journal>>;

/// Builds the demo tree around `journal`.
pub fn build_tree(journal: &SharedJournal) -> Folder {
    let mut root = Folder::new();

    let j = Rc::clone(journal);
    root.add_command("status", move |line, term| {
        j.borrow_mut().record(line);
        let count = j.borrow().entries().len();
        term.write_line(&format!("{} command(s) run this session", count))
    });

    // One handler under two names, branching on the line it was called with
    for name in ["hello", "bye"] {
        let j = Rc::clone(journal);
        root.add_command(name, move |line, term| {
            j.borrow_mut().record(line);
            let reply = if line == "hello" { "hi there" } else { "see you" };
            term.write_line(reply)
        });
    }

    let j = Rc::clone(journal);
    root.add_command("journal", move |line, term| {
        j.borrow_mut().record(line);
        for (i, entry) in j.borrow().entries().iter().enumerate() {
            term.write_line(&format!("{:>4}  {}", i + 1, entry))?;
        }
        Ok(())
    });

    root.add_folder("logs", logs_folder(journal));
    root.add_folder("system", system_folder(journal));
    root
}

fn logs_folder(journal: &SharedJournal) -> Folder {
    let mut logs = Folder::new();

    let j = Rc::clone(journal);
    logs.add_command("tail", move |line, term| {
        j.borrow_mut().record(line);
        for entry in j.borrow().tail(TAIL_LEN) {
            term.write_line(entry)?;
        }
        Ok(())
    });

    let j = Rc::clone(journal);
    logs.add_command("clear", move |_, term| {
        j.borrow_mut().clear();
        term.write_line("journal cleared")
    });

    logs
}

fn system_folder(journal: &SharedJournal) -> Folder {
    let mut system = Folder::new();
    let started = Instant::now();

    let j = Rc::clone(journal);
    system.add_command("whoami", move |line, term| {
        j.borrow_mut().record(line);
        let identity = Identity::current();
        term.write_line(&format!("{}@{}", identity.username, identity.hostname))
    });

    let j = Rc::clone(journal);
    system.add_command("uptime", move |line, term| {
        j.borrow_mut().record(line);
        term.write_line(&format_uptime(started.elapsed().as_secs()))
    });

    // Overrides the built-in listing; this folder has no children
    let j = Rc::clone(journal);
    system.add_command("ls", move |line, term| {
        j.borrow_mut().record(line);
        list_commands(term, &["ls", "uptime", "whoami"])
    });

    system
}

fn list_commands(term: &mut dyn LineIo, names: &[&str]) -> Result<()> {
    for name in names {
        term.write_line(&format!("{}*", name))?;
    }
    Ok(())
}

fn format_uptime(secs: u64) -> String {
    let mins = secs / 60;
    let secs = secs % 60;
    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}
