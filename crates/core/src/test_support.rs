//! Shared fixtures for the engine tests.

use smartclip_buffer::{Region, TextBuffer, TextView};
use smartclip_clipboard::MemoryClipboard;
use smartclip_config::EditorSettings;

use crate::{ClipboardSession, Command, Picker, PickerCallback, PickerChoice, PickerStyle};

/// Buffer holding `text` with exactly the given selection regions
pub fn buffer(text: &str, regions: &[(usize, usize)]) -> TextBuffer {
    let mut view = TextBuffer::from_text(text);
    view.set_selections(regions.iter().map(|&(a, b)| Region::new(a, b)).collect());
    view
}

/// Session over an in-memory clipboard, plus a handle to that clipboard
pub fn session(copy_with_empty_selection: bool) -> (ClipboardSession<MemoryClipboard>, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let settings = EditorSettings {
        copy_with_empty_selection,
        ..EditorSettings::default()
    };
    (ClipboardSession::new(clipboard.clone(), settings), clipboard)
}

/// Picker that remembers what it was asked to show
#[derive(Default)]
pub struct RecordingPicker {
    pub labels: Option<Vec<String>>,
    pub style: Option<PickerStyle>,
    callback: Option<PickerCallback>,
}

impl RecordingPicker {
    /// Simulate the user's choice
    pub fn choose(&mut self, choice: PickerChoice) -> Option<Command> {
        let callback = self.callback.take()?;
        callback(choice)
    }
}

impl Picker for RecordingPicker {
    fn show(&mut self, labels: Vec<String>, style: PickerStyle, on_choose: PickerCallback) {
        self.labels = Some(labels);
        self.style = Some(style);
        self.callback = Some(on_choose);
    }
}
