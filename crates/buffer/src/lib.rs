//! Text buffer with rope data structure for smartclip.
//!
//! Provides a rope-backed buffer with a multi-region selection, addressed
//! by character offsets, plus the [`TextView`] trait the clipboard engines
//! are written against.

mod buffer;
mod region;
mod view;

pub use buffer::TextBuffer;
pub use region::{normalize_selection, Region};
pub use view::TextView;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineEnding {
    /// Classic Mac \r
    CR,
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}

impl LineEnding {
    /// Separator string for this line ending
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CR => "\r",
            LineEnding::LF => "\n",
            LineEnding::CRLF => "\r\n",
        }
    }

    /// Guess the line ending of existing text; defaults to LF
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CRLF
        } else if text.contains('\r') {
            LineEnding::CR
        } else {
            LineEnding::LF
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    /// Parse editor line ending names ("CR", "Unix", "Windows")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CR" => Ok(LineEnding::CR),
            "Unix" | "LF" => Ok(LineEnding::LF),
            "Windows" | "CRLF" => Ok(LineEnding::CRLF),
            _ => Err(format!("Unknown line ending: {}", s)),
        }
    }
}
