//! Paste from history.
//!
//! Showing the picker and acting on the choice are two separate commands:
//! the picker callback only turns the choice into a
//! [`Command::PasteFromHistoryAt`], which the host dispatches like any other.

use anyhow::Result;

use smartclip_buffer::TextView;
use smartclip_clipboard::SystemClipboard;
use smartclip_logger as logger;

use crate::{ClipboardSession, Command, Picker, PickerChoice, PickerStyle, StatusSink};

/// Continuation for the history picker
fn history_choice(choice: PickerChoice) -> Option<Command> {
    match choice {
        PickerChoice::Chosen(index) => Some(Command::PasteFromHistoryAt(index)),
        PickerChoice::Cancelled => None,
    }
}

impl<C: SystemClipboard> ClipboardSession<C> {
    /// Present the paste history. Does nothing when the history is empty.
    pub fn paste_from_history(&mut self, picker: &mut dyn Picker) -> Result<bool> {
        if self.history.is_empty() {
            return Ok(false);
        }
        let style = PickerStyle::from_setting(self.settings.paste_from_history_quick_panel);
        picker.show(self.history.to_display_list(), style, Box::new(history_choice));
        Ok(true)
    }

    /// Put history entry `index` on the clipboard and paste it.
    pub fn paste_from_history_at(
        &mut self,
        index: usize,
        view: &mut dyn TextView,
        status: &mut dyn StatusSink,
    ) -> Result<bool> {
        let Some(entry) = self.history.get(index).map(str::to_string) else {
            anyhow::bail!(
                "History index {} out of range ({} entries)",
                index,
                self.history.len()
            );
        };
        logger::debug(format!("Pasting history entry {}", index));
        self.clipboard.set_text(&entry)?;
        self.paste(view, status)
    }
}
