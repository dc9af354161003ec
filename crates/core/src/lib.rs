//! Multi-region clipboard engines for smartclip.
//!
//! Copy keeps one fragment per selection region instead of one joined
//! string, and paste pairs those fragments back up with the regions it
//! pastes into. A [`ClipboardSession`] owns the fragment store, the paste
//! history and the clipboard bridge; hosts drive it with [`Command`]s.

pub mod command;
pub mod copy;
pub mod fragment;
pub mod history;
pub mod host;
pub mod paste;
pub mod picker;
pub mod session;
pub mod status;

#[cfg(test)]
mod test_support;

pub use command::{Command, CommandKind, CommandTable};
pub use copy::{capture_selection, Capture};
pub use fragment::{collapse_identical, Fragment, FragmentStore};
pub use history::{HistoryRing, HISTORY_CAPACITY};
pub use host::{HostContext, Picker, PickerCallback, PickerChoice, PickerStyle, StatusSink};
pub use paste::fragments_per_target;
pub use session::ClipboardSession;
pub use status::format_status;

// Re-export the host-facing building blocks for convenience
pub use smartclip_buffer::{LineEnding, Region, TextView};
pub use smartclip_clipboard::SystemClipboard;
pub use smartclip_config::EditorSettings;
