//! smartclip: multi-region clipboard manager for text editors.
//!
//! [`Host`] is the glue an editor embeds: it loads the configuration, sets up
//! logging, owns the clipboard session and resolves the editor's command names
//! (including the generic `copy`/`cut`/`paste`) to clipboard commands.

use anyhow::Result;
use std::str::FromStr;

use smartclip_clipboard::SystemClipboardBridge;
use smartclip_config::Config;
use smartclip_core::{
    ClipboardSession, Command, CommandTable, HostContext, Picker, PickerCallback, PickerChoice,
    SystemClipboard, TextView,
};
use smartclip_logger::{self as logger, LogLevel};

pub use smartclip_buffer::{LineEnding, Region, TextBuffer};
pub use smartclip_clipboard::MemoryClipboard;
pub use smartclip_core as core;

/// Outcome of handing a host command to [`Host::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The command ran and changed state
    Ran,
    /// The command was ours but had nothing to do
    NoOp,
    /// Not a clipboard command; the editor should run its own
    NotHandled,
}

/// Editor-side owner of one clipboard session.
pub struct Host<C: SystemClipboard> {
    config: Config,
    commands: CommandTable,
    session: ClipboardSession<C>,
    /// Status bar messages, oldest first
    status_messages: Vec<String>,
}

impl Host<SystemClipboardBridge> {
    /// Load the user configuration, start logging and connect to the OS clipboard.
    pub fn start() -> Result<Self> {
        let (config, load_error) = match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        init_logging(&config)?;
        if let Some(e) = load_error {
            logger::warn(format!("Failed to load config, using defaults: {}", e));
        }

        let clipboard = SystemClipboardBridge::new()?;
        logger::info("Clipboard session started");
        Ok(Self::new(config, clipboard))
    }
}

impl<C: SystemClipboard> Host<C> {
    pub fn new(config: Config, clipboard: C) -> Self {
        let session = ClipboardSession::new(clipboard, config.editor.clone());
        Self {
            config,
            commands: CommandTable::new(),
            session,
            status_messages: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply new settings to subsequent commands
    pub fn set_config(&mut self, config: Config) {
        self.session.set_settings(config.editor.clone());
        self.config = config;
    }

    pub fn session(&self) -> &ClipboardSession<C> {
        &self.session
    }

    pub fn status_messages(&self) -> &[String] {
        &self.status_messages
    }

    pub fn last_status(&self) -> Option<&str> {
        self.status_messages.last().map(String::as_str)
    }

    /// Handle an editor command by name.
    pub fn dispatch(
        &mut self,
        name: &str,
        index: Option<usize>,
        view: &mut dyn TextView,
        picker: &mut dyn Picker,
    ) -> Result<Dispatch> {
        let Some(command) = self.commands.resolve(name, index)? else {
            return Ok(Dispatch::NotHandled);
        };
        if self.run(command, view, picker)? {
            Ok(Dispatch::Ran)
        } else {
            Ok(Dispatch::NoOp)
        }
    }

    /// Run a resolved command.
    pub fn run(
        &mut self,
        command: Command,
        view: &mut dyn TextView,
        picker: &mut dyn Picker,
    ) -> Result<bool> {
        let mut host = HostContext::new(view, &mut self.status_messages, picker);
        let result = self.session.execute(command, &mut host);
        if let Err(e) = &result {
            logger::error(format!("{:?} failed: {:#}", command, e));
        }
        result
    }

    /// Finish a picker interaction started by `paste_from_history`.
    ///
    /// The chosen entry is pasted through the same path as any other command;
    /// a cancelled picker does nothing.
    pub fn on_picker_choice(
        &mut self,
        callback: PickerCallback,
        choice: PickerChoice,
        view: &mut dyn TextView,
        picker: &mut dyn Picker,
    ) -> Result<bool> {
        match callback(choice) {
            Some(command) => self.run(command, view, picker),
            None => Ok(false),
        }
    }
}

/// Initialize the global logger from the `[logging]` settings.
pub fn init_logging(config: &Config) -> Result<()> {
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    logger::init(config.log_file_path()?, min_level);
    Ok(())
}
