//! End-to-end navigation through a small command tree.

use std::cell::Cell;
use std::rc::Rc;

use cmdfolder::{Folder, PromptTemplate, ReadLine, ScriptedTerm};

fn counter(folder: &mut Folder, name: &str) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    folder.add_command(name, move |_, _| {
        handle.set(handle.get() + 1);
        Ok(())
    });
    count
}

#[test]
fn test_status_logs_scenario() {
    let mut logs = Folder::new();
    let tail = counter(&mut logs, "tail");

    let mut root = Folder::new();
    let status = counter(&mut root, "status");
    root.add_folder("logs", logs);

    let mut term = ScriptedTerm::new(["status", "cd logs", "tail", "..", "cd missing", "ls"]);
    root.run_with_term(PromptTemplate::new("~{path} %").unwrap(), &mut term)
        .unwrap();

    assert_eq!(status.get(), 1, "status should run once");
    assert_eq!(tail.get(), 1, "tail should run once inside logs");
    assert_eq!(term.output(), "Folder not found\nlogs\n\n");
    assert_eq!(
        term.prompts(),
        ["~ % ".to_string(), "~/logs % ".to_string(), "~ % ".to_string()]
    );
}

#[test]
fn test_ls_lists_names_regardless_of_insertion_order() {
    let names = ["beta", "alpha", "gamma"];

    let mut forward = Folder::new();
    for name in names {
        forward.add_folder(name, Folder::new());
    }
    let mut backward = Folder::new();
    for name in names.iter().rev() {
        backward.add_folder(*name, Folder::new());
    }

    let mut a = ScriptedTerm::new(["ls"]);
    let mut b = ScriptedTerm::new(["ls"]);
    let template = PromptTemplate::new("{path}>").unwrap();
    forward.run_with_term(template.clone(), &mut a).unwrap();
    backward.run_with_term(template, &mut b).unwrap();

    assert_eq!(a.output(), "alpha\nbeta\ngamma\n\n");
    assert_eq!(a.output(), b.output());
}

#[test]
fn test_nested_folder_can_be_run_on_its_own() {
    let mut leaf = Folder::new();
    let ping = counter(&mut leaf, "ping");

    let mut term = ScriptedTerm::from_outcomes([
        ReadLine::Line("ping".to_string()),
        ReadLine::Interrupted,
        ReadLine::Line("..".to_string()),
        ReadLine::Line("ping".to_string()),
    ]);
    leaf.run_with_term(PromptTemplate::new("leaf{path}$").unwrap(), &mut term)
        .unwrap();

    assert_eq!(ping.get(), 1);
    assert_eq!(term.pending(), 1);
    assert_eq!(term.prompts(), ["leaf$ ".to_string()]);
}

#[test]
fn test_shared_state_between_folders() {
    let hits = Rc::new(Cell::new(0u32));

    let mut child = Folder::new();
    let mut root = Folder::new();
    for folder in [&mut root, &mut child] {
        let hits = Rc::clone(&hits);
        folder.add_command("hit", move |_, _| {
            hits.set(hits.get() + 1);
            Ok(())
        });
    }
    root.add_folder("child", child);

    let mut term = ScriptedTerm::new(["hit", "cd child", "hit", "hit"]);
    root.run_with_term(PromptTemplate::new("{path}>").unwrap(), &mut term)
        .unwrap();

    assert_eq!(hits.get(), 3);
    // Drained input unwinds child then root, one newline each
    assert_eq!(term.output(), "\n\n");
}
