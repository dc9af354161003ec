//! Clipboard session: the state shared by every clipboard command.
//!
//! One session lives for one editor session. It owns the fragment store,
//! the paste history and the clipboard bridge; the engines are implemented
//! on it in `copy.rs`, `paste.rs` and `picker.rs`.

use anyhow::Result;

use smartclip_clipboard::SystemClipboard;
use smartclip_config::EditorSettings;
use smartclip_logger as logger;

use crate::{Command, FragmentStore, HistoryRing, HostContext};

pub struct ClipboardSession<C: SystemClipboard> {
    pub(crate) store: FragmentStore,
    pub(crate) history: HistoryRing,
    pub(crate) clipboard: C,
    pub(crate) settings: EditorSettings,
}

impl<C: SystemClipboard> ClipboardSession<C> {
    pub fn new(clipboard: C, settings: EditorSettings) -> Self {
        Self {
            store: FragmentStore::new(),
            history: HistoryRing::new(),
            clipboard,
            settings,
        }
    }

    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    /// Run one command to completion.
    ///
    /// Returns `false` for silent no-ops (nothing selected, nothing captured,
    /// empty history).
    pub fn execute(&mut self, command: Command, host: &mut HostContext<'_>) -> Result<bool> {
        logger::debug(format!("Executing {:?}", command));
        match command {
            Command::Copy => self.copy(&*host.view, &mut *host.status),
            Command::Cut => self.cut(&mut *host.view, &mut *host.status),
            Command::Paste => self.paste(&mut *host.view, &mut *host.status),
            Command::PasteFromHistory => self.paste_from_history(&mut *host.picker),
            Command::PasteFromHistoryAt(index) => {
                self.paste_from_history_at(index, &mut *host.view, &mut *host.status)
            }
        }
    }
}
