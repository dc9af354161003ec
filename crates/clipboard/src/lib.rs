//! System clipboard bridge for smartclip.
//!
//! The clipboard is the one channel shared with other applications, so the
//! engines treat it as a plain string store that may change behind their back.
//! [`SystemClipboardBridge`] talks to the OS through arboard; [`MemoryClipboard`]
//! keeps the string in-process for headless hosts and tests.

use anyhow::{Context, Result};
use arboard::Clipboard;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Single-string clipboard the engines read and write.
pub trait SystemClipboard {
    /// Current clipboard text; an empty or non-text clipboard reads as `""`
    fn get_text(&mut self) -> Result<String>;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard accessed through arboard.
///
/// On Linux, writes go to both CLIPBOARD and PRIMARY selections while reads
/// only consult CLIPBOARD.
pub struct SystemClipboardBridge {
    clipboard: Clipboard,
}

impl SystemClipboardBridge {
    /// Connect to the OS clipboard.
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl SystemClipboard for SystemClipboardBridge {
    fn get_text(&mut self) -> Result<String> {
        #[cfg(target_os = "linux")]
        let result = self
            .clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text();

        #[cfg(not(target_os = "linux"))]
        let result = self.clipboard.get_text();

        match result {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e).context("Failed to get clipboard text"),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        {
            // CLIPBOARD selection (Ctrl+C/V)
            self.clipboard
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string())
                .context("Failed to set clipboard text")?;

            // PRIMARY selection (middle-click) is best effort
            let _ = self
                .clipboard
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
        }

        #[cfg(not(target_os = "linux"))]
        self.clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;

        Ok(())
    }
}

/// In-process clipboard.
///
/// Clones share the same contents, so a clone can stand in for another
/// application writing to the clipboard between commands.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<String>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(text.into())),
        }
    }

    /// Current contents without going through the trait
    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }
}

impl SystemClipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.contents())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = text.to_string();
        Ok(())
    }
}
