//! Paste: distributing stored fragments over the selection regions.

use anyhow::{Context, Result};

use smartclip_buffer::{Region, TextView};
use smartclip_clipboard::SystemClipboard;
use smartclip_logger as logger;

use crate::{format_status, ClipboardSession, Fragment, StatusSink};

/// How many consecutive fragments each paste target receives.
///
/// * Targets are a multiple of fragments: one fragment each, cycling.
/// * Fragments are a multiple of targets: an equal contiguous block each.
/// * Anything else: every target receives all fragments.
///
/// Returns `None` if either count is zero.
pub fn fragments_per_target(num_fragments: usize, num_targets: usize) -> Option<usize> {
    if num_fragments == 0 || num_targets == 0 {
        return None;
    }
    if num_fragments <= num_targets && num_targets % num_fragments == 0 {
        Some(1)
    } else if num_targets < num_fragments && num_fragments % num_targets == 0 {
        Some(num_fragments / num_targets)
    } else {
        Some(num_fragments)
    }
}

/// Replace each target with its block of fragments.
///
/// Targets are processed in ascending order; `delta` tracks how far earlier
/// edits moved the later targets. Whole-line fragments go to the start of the
/// line holding the insertion point, which moves any caret already recorded
/// on that line. Returns one caret after every inserted fragment.
fn distribute(
    view: &mut dyn TextView,
    targets: &[Region],
    fragments: &[Fragment],
    per_target: usize,
) -> Result<Vec<Region>> {
    let mut carets: Vec<Region> = Vec::with_capacity(targets.len() * per_target);
    let mut delta: isize = 0;
    let mut next = 0;

    for target in targets {
        let target = target
            .shifted(delta)
            .with_context(|| format!("Paste target {:?} moved before buffer start", target))?;
        view.erase(target)?;
        delta -= target.len() as isize;

        let mut insertion_point = target.start;
        for i in 0..per_target {
            let fragment = &fragments[(next + i) % fragments.len()];
            let offset = if fragment.is_whole_line() {
                view.line(insertion_point)?.start
            } else {
                insertion_point
            };
            let inserted = view.insert(offset, fragment.text())?;
            if fragment.is_whole_line() {
                for caret in carets.iter_mut().filter(|c| c.start >= offset) {
                    *caret = Region::caret(caret.start + inserted);
                }
            }
            insertion_point += inserted;
            delta += inserted as isize;
            carets.push(Region::caret(insertion_point));
        }
        next = (next + per_target) % fragments.len();
    }

    Ok(carets)
}

impl<C: SystemClipboard> ClipboardSession<C> {
    /// Paste the stored fragments into the current selection.
    ///
    /// The system clipboard is checked first: text that does not match the
    /// store was put there by someone else and is pasted as one fragment.
    pub fn paste(&mut self, view: &mut dyn TextView, status: &mut dyn StatusSink) -> Result<bool> {
        let targets = view.selections();
        if targets.is_empty() {
            return Ok(false);
        }

        let clipboard = self.clipboard.get_text()?;
        self.history.push(&clipboard);
        if self.store.reconcile(&clipboard) {
            logger::debug("Clipboard differs from stored fragments, pasting clipboard text");
        }

        let fragments = self.store.fragments().to_vec();
        let Some(per_target) = fragments_per_target(fragments.len(), targets.len()) else {
            anyhow::bail!(
                "No distribution for {} fragment(s) over {} target(s)",
                fragments.len(),
                targets.len()
            );
        };

        let carets = distribute(view, &targets, &fragments, per_target)?;
        view.set_selections(carets);

        logger::debug(format!(
            "Pasted {} fragment(s) into {} target(s), {} per target",
            fragments.len(),
            targets.len(),
            per_target
        ));
        status.status_message(&format_status(
            "Pasted",
            self.store.char_count(),
            targets.len(),
        ));
        Ok(true)
    }
}
