use anyhow::{Context, Result};
use ropey::Rope;
use std::path::Path;

use crate::{normalize_selection, LineEnding, Region, TextView};

/// Text buffer based on Rope, with a multi-region selection
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// Line ending type used when joining copied text
    line_ending: LineEnding,
    /// Selection regions, sorted and non-overlapping
    selections: Vec<Region>,
}

impl TextBuffer {
    /// Create a new empty buffer with a caret at offset 0
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create buffer from text, detecting its line ending
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            line_ending: LineEnding::detect(text),
            selections: vec![Region::caret(0)],
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::from_text(&contents))
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Override the detected line ending
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.rope.len_chars() {
            anyhow::bail!(
                "Offset {} out of range (buffer has {} chars)",
                offset,
                self.rope.len_chars()
            );
        }
        Ok(())
    }

    fn check_region(&self, region: Region) -> Result<()> {
        self.check_offset(region.start)?;
        self.check_offset(region.end)
    }

    /// Shift selection endpoints after `count` chars were inserted at `offset`
    fn adjust_for_insert(&mut self, offset: usize, count: usize) {
        let shift = |x: usize| if x >= offset { x + count } else { x };
        for region in &mut self.selections {
            *region = Region::new(shift(region.start), shift(region.end));
        }
    }

    /// Pull selection endpoints out of an erased region
    fn adjust_for_erase(&mut self, erased: Region) {
        let shift = |x: usize| {
            if x <= erased.start {
                x
            } else if x >= erased.end {
                x - erased.len()
            } else {
                erased.start
            }
        };
        let regions = self
            .selections
            .iter()
            .map(|r| Region::new(shift(r.start), shift(r.end)))
            .collect();
        self.selections = normalize_selection(regions);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextView for TextBuffer {
    fn selections(&self) -> Vec<Region> {
        self.selections.clone()
    }

    fn set_selections(&mut self, regions: Vec<Region>) {
        self.selections = normalize_selection(regions);
    }

    fn substr(&self, region: Region) -> Result<String> {
        self.check_region(region)?;
        Ok(self.rope.slice(region.start..region.end).to_string())
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<usize> {
        self.check_offset(offset)?;
        let count = text.chars().count();
        self.rope.insert(offset, text);
        self.adjust_for_insert(offset, count);
        Ok(count)
    }

    fn erase(&mut self, region: Region) -> Result<()> {
        self.check_region(region)?;
        if !region.is_empty() {
            self.rope.remove(region.start..region.end);
            self.adjust_for_erase(region);
        }
        Ok(())
    }

    fn full_line(&self, offset: usize) -> Result<Region> {
        self.check_offset(offset)?;
        let line_idx = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(line_idx);
        let end = if line_idx + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line_idx + 1)
        } else {
            self.rope.len_chars()
        };
        Ok(Region::new(start, end))
    }

    fn line(&self, offset: usize) -> Result<Region> {
        let full = self.full_line(offset)?;
        let mut end = full.end;
        if end > full.start && self.rope.char(end - 1) == '\n' {
            end -= 1;
        }
        if end > full.start && self.rope.char(end - 1) == '\r' {
            end -= 1;
        }
        Ok(Region::new(full.start, end))
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}
