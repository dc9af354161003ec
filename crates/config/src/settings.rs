//! Configuration structures for smartclip settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings consulted by the clipboard commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Copy/cut the whole line under an empty caret
    #[serde(default = "default_copy_with_empty_selection")]
    pub copy_with_empty_selection: bool,

    /// Show paste history in the quick panel instead of a popup menu
    #[serde(default = "default_paste_from_history_quick_panel")]
    pub paste_from_history_quick_panel: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_copy_with_empty_selection() -> bool {
    defaults::COPY_WITH_EMPTY_SELECTION
}

fn default_paste_from_history_quick_panel() -> bool {
    defaults::PASTE_FROM_HISTORY_QUICK_PANEL
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            copy_with_empty_selection: default_copy_with_empty_selection(),
            paste_from_history_quick_panel: default_paste_from_history_quick_panel(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
