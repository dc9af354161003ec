//! Command surface exposed to the host.
//!
//! Host command names are resolved once through a [`CommandTable`] built at
//! startup, instead of matching strings on every dispatch.

use anyhow::Result;
use std::collections::HashMap;

/// Commands the clipboard session can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Copy,
    Cut,
    Paste,
    /// Show the history picker
    PasteFromHistory,
    /// Paste the history entry at the given index
    PasteFromHistoryAt(usize),
}

/// Command without its arguments, as stored in the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Copy,
    Cut,
    Paste,
    PasteFromHistory,
    PasteFromHistoryAt,
}

impl CommandKind {
    /// Attach host-supplied arguments.
    ///
    /// Only `PasteFromHistoryAt` takes an index; a missing index there, or an
    /// index given to any other command, is a malformed invocation.
    pub fn with_index(self, index: Option<usize>) -> Result<Command> {
        match (self, index) {
            (CommandKind::PasteFromHistoryAt, Some(index)) => Ok(Command::PasteFromHistoryAt(index)),
            (CommandKind::PasteFromHistoryAt, None) => {
                anyhow::bail!("paste_from_history_at requires an index")
            }
            (kind, Some(index)) => anyhow::bail!("{:?} takes no index (got {})", kind, index),
            (CommandKind::Copy, None) => Ok(Command::Copy),
            (CommandKind::Cut, None) => Ok(Command::Cut),
            (CommandKind::Paste, None) => Ok(Command::Paste),
            (CommandKind::PasteFromHistory, None) => Ok(Command::PasteFromHistory),
        }
    }
}

/// Host command name to command mapping.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: HashMap<String, CommandKind>,
}

impl CommandTable {
    /// Table with the standard bindings.
    ///
    /// The editor's generic `copy`/`cut`/`paste` commands (menu items and key
    /// bindings) are taken over alongside the dedicated names.
    pub fn new() -> Self {
        let mut table = Self {
            entries: HashMap::new(),
        };
        for (name, kind) in [
            ("copy", CommandKind::Copy),
            ("cut", CommandKind::Cut),
            ("paste", CommandKind::Paste),
            ("copy_edit", CommandKind::Copy),
            ("cut_edit", CommandKind::Cut),
            ("paste_edit", CommandKind::Paste),
            ("paste_from_history", CommandKind::PasteFromHistory),
            ("paste_from_history_at", CommandKind::PasteFromHistoryAt),
        ] {
            table.register(name, kind);
        }
        table
    }

    /// Bind an additional host command name
    pub fn register(&mut self, name: impl Into<String>, kind: CommandKind) {
        self.entries.insert(name.into(), kind);
    }

    /// Look up a host command; `None` means the host should run its own command
    pub fn lookup(&self, name: &str) -> Option<CommandKind> {
        self.entries.get(name).copied()
    }

    /// Resolve a host command name and its arguments into a command.
    pub fn resolve(&self, name: &str, index: Option<usize>) -> Result<Option<Command>> {
        match self.lookup(name) {
            Some(kind) => Ok(Some(kind.with_index(index)?)),
            None => Ok(None),
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
