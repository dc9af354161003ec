//! Editor-facing view abstraction.
//!
//! The clipboard engines only talk to a buffer through [`TextView`], so any
//! editor that can expose selections and character-offset editing can host them.

use anyhow::Result;

use crate::{LineEnding, Region};

/// A text buffer together with its multi-region selection.
///
/// All offsets are character offsets. Implementations keep the selection
/// sorted ascending and free of overlaps.
pub trait TextView {
    /// Current selection regions in ascending order
    fn selections(&self) -> Vec<Region>;

    /// Replace the selection; implementations normalize the regions
    fn set_selections(&mut self, regions: Vec<Region>);

    /// Text covered by `region`
    fn substr(&self, region: Region) -> Result<String>;

    /// Insert `text` at `offset`, returning the number of characters inserted
    fn insert(&mut self, offset: usize, text: &str) -> Result<usize>;

    /// Remove the text covered by `region`
    fn erase(&mut self, region: Region) -> Result<()>;

    /// Line containing `offset`, including its terminator
    fn full_line(&self, offset: usize) -> Result<Region>;

    /// Line containing `offset`, without its terminator
    fn line(&self, offset: usize) -> Result<Region>;

    /// Line ending convention of the buffer
    fn line_ending(&self) -> LineEnding;
}
