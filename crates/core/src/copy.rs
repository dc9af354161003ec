//! Copy and cut.
//!
//! Every selection region becomes one fragment. Empty regions capture their
//! whole line when `copy_with_empty_selection` is on and are skipped otherwise,
//! even when other regions are non-empty.

use anyhow::Result;

use smartclip_buffer::{normalize_selection, Region, TextView};
use smartclip_clipboard::SystemClipboard;
use smartclip_logger as logger;

use crate::fragment::collapse_identical;
use crate::{format_status, ClipboardSession, Fragment, StatusSink};

/// A fragment paired with the region it was captured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub region: Region,
    pub fragment: Fragment,
}

impl Capture {
    /// Range a cut removes for this capture
    fn erase_range(&self, view: &dyn TextView) -> Result<Region> {
        if self.fragment.is_whole_line() {
            view.full_line(self.region.start)
        } else {
            Ok(self.region)
        }
    }
}

/// Capture one fragment per selection region, in selection order.
pub fn capture_selection(view: &dyn TextView, copy_with_empty_selection: bool) -> Result<Vec<Capture>> {
    let mut captures = Vec::new();
    for region in view.selections() {
        let fragment = if !region.is_empty() {
            Fragment::new(view.substr(region)?, false)
        } else if copy_with_empty_selection {
            let line = view.full_line(region.start)?;
            Fragment::new(view.substr(line)?, true)
        } else {
            continue;
        };
        captures.push(Capture { region, fragment });
    }
    Ok(captures)
}

impl<C: SystemClipboard> ClipboardSession<C> {
    /// Shared copy step of copy and cut.
    ///
    /// Returns the per-region captures before collapsing, or an empty list when
    /// nothing was captured, in which case no state has changed.
    fn copy_selection(&mut self, view: &dyn TextView) -> Result<Vec<Capture>> {
        let captures = capture_selection(view, self.settings.copy_with_empty_selection)?;
        if captures.is_empty() {
            return Ok(captures);
        }

        let fragments: Vec<Fragment> = captures.iter().map(|c| c.fragment.clone()).collect();
        let stored = collapse_identical(&fragments);
        let joined = stored
            .iter()
            .map(Fragment::text)
            .collect::<Vec<_>>()
            .join(view.line_ending().as_str());

        self.clipboard.set_text(&joined)?;
        self.history.push(&joined);
        self.store.replace(stored);

        logger::debug(format!(
            "Captured {} region(s), storing {} fragment(s)",
            captures.len(),
            self.store.len()
        ));
        Ok(captures)
    }

    /// Copy the selection to the clipboard.
    pub fn copy(&mut self, view: &dyn TextView, status: &mut dyn StatusSink) -> Result<bool> {
        if self.copy_selection(view)?.is_empty() {
            return Ok(false);
        }
        status.status_message(&format_status(
            "Copied",
            self.store.char_count(),
            self.store.len(),
        ));
        Ok(true)
    }

    /// Copy the selection, then erase every captured range.
    ///
    /// Whole-line captures erase their full line. Ranges are erased from the
    /// last to the first so earlier offsets stay valid; overlapping ranges
    /// (two carets on one line) are erased once. The view keeps its own
    /// selection, shifted by the erasures.
    pub fn cut(&mut self, view: &mut dyn TextView, status: &mut dyn StatusSink) -> Result<bool> {
        let captures = self.copy_selection(&*view)?;
        if captures.is_empty() {
            return Ok(false);
        }

        let ranges = captures
            .iter()
            .map(|c| c.erase_range(&*view))
            .collect::<Result<Vec<_>>>()?;
        let ranges = normalize_selection(ranges);

        for range in ranges.iter().rev() {
            view.erase(*range)?;
        }

        status.status_message(&format_status("Cut", self.store.char_count(), self.store.len()));
        Ok(true)
    }
}
