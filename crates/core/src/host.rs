//! Host-side collaborators the engines call into.
//!
//! Text and selections go through [`smartclip_buffer::TextView`] and the
//! clipboard through [`smartclip_clipboard::SystemClipboard`]; this module
//! covers the remaining UI surfaces.

use smartclip_buffer::TextView;

use crate::Command;

/// Receives status bar messages.
pub trait StatusSink {
    fn status_message(&mut self, message: &str);
}

/// Collects messages in order; handy for headless hosts.
impl StatusSink for Vec<String> {
    fn status_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// How the history picker should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStyle {
    /// Searchable quick panel
    QuickPanel,
    /// Popup menu at the caret
    PopupMenu,
}

impl PickerStyle {
    /// Style selected by the `paste_from_history_quick_panel` setting
    pub fn from_setting(quick_panel: bool) -> Self {
        if quick_panel {
            PickerStyle::QuickPanel
        } else {
            PickerStyle::PopupMenu
        }
    }
}

/// What the user did with a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerChoice {
    Chosen(usize),
    Cancelled,
}

impl PickerChoice {
    /// Map a host index where any negative value means "dismissed"
    pub fn from_host_index(index: i64) -> Self {
        usize::try_from(index)
            .map(PickerChoice::Chosen)
            .unwrap_or(PickerChoice::Cancelled)
    }
}

/// Single-shot continuation handed to the picker.
///
/// The host calls it once with the user's choice and dispatches the returned
/// command, if any, like any other command.
pub type PickerCallback = Box<dyn FnOnce(PickerChoice) -> Option<Command>>;

/// Shows a list of labels and reports the choice later.
pub trait Picker {
    fn show(&mut self, labels: Vec<String>, style: PickerStyle, on_choose: PickerCallback);
}

/// Everything a command may touch on the host side.
pub struct HostContext<'a> {
    pub view: &'a mut dyn TextView,
    pub status: &'a mut dyn StatusSink,
    pub picker: &'a mut dyn Picker,
}

impl<'a> HostContext<'a> {
    pub fn new(
        view: &'a mut dyn TextView,
        status: &'a mut dyn StatusSink,
        picker: &'a mut dyn Picker,
    ) -> Self {
        Self {
            view,
            status,
            picker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_choice_from_host_index() {
        assert_eq!(PickerChoice::from_host_index(3), PickerChoice::Chosen(3));
        assert_eq!(PickerChoice::from_host_index(-1), PickerChoice::Cancelled);
    }

    #[test]
    fn test_picker_style_from_setting() {
        assert_eq!(PickerStyle::from_setting(true), PickerStyle::QuickPanel);
        assert_eq!(PickerStyle::from_setting(false), PickerStyle::PopupMenu);
    }

    #[test]
    fn test_vec_status_sink() {
        let mut messages: Vec<String> = Vec::new();
        messages.status_message("Copied 1 character");
        assert_eq!(messages, vec!["Copied 1 character"]);
    }
}
