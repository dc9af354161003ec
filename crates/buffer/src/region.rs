use std::cmp::{max, min};

/// Half-open range of character offsets in a buffer.
///
/// `start == end` is an empty region (a caret). The constructor orders the
/// endpoints, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First offset covered by the region
    pub start: usize,
    /// Offset one past the last covered character
    pub end: usize,
}

impl Region {
    /// Create a region from two endpoints in any order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: min(a, b),
            end: max(a, b),
        }
    }

    /// Create an empty region at `offset`
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Region is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Move both endpoints by `delta` characters.
    ///
    /// Returns `None` if the result would fall below offset 0.
    pub fn shifted(&self, delta: isize) -> Option<Region> {
        Some(Region {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
        })
    }
}

/// Sort regions ascending and merge the ones that overlap.
///
/// Regions that merely touch stay separate, so character-by-character
/// selections survive. Duplicate carets collapse into one.
pub fn normalize_selection(mut regions: Vec<Region>) -> Vec<Region> {
    regions.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Region> = Vec::with_capacity(regions.len());
    for region in regions {
        match merged.last_mut() {
            Some(last) if region == *last || region.start < last.end => {
                last.end = max(last.end, region.end);
            }
            _ => merged.push(region),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_endpoints() {
        let region = Region::new(10, 4);
        assert_eq!(region.start, 4);
        assert_eq!(region.end, 10);
        assert_eq!(region.len(), 6);
        assert!(!region.is_empty());
    }

    #[test]
    fn test_caret() {
        let caret = Region::caret(7);
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
        assert_eq!(Region::new(9, 4), Region::new(4, 9));
    }

    #[test]
    fn test_shifted() {
        assert_eq!(Region::new(3, 5).shifted(2), Some(Region::new(5, 7)));
        assert_eq!(Region::new(3, 5).shifted(-3), Some(Region::new(0, 2)));
        assert_eq!(Region::new(3, 5).shifted(-4), None);
    }

    #[test]
    fn test_normalize_sorts_and_merges_overlaps() {
        let regions = vec![Region::new(8, 12), Region::new(0, 3), Region::new(2, 5)];
        assert_eq!(
            normalize_selection(regions),
            vec![Region::new(0, 5), Region::new(8, 12)]
        );
    }

    #[test]
    fn test_normalize_keeps_touching_regions() {
        let regions = vec![Region::new(1, 2), Region::new(0, 1), Region::new(2, 3)];
        assert_eq!(
            normalize_selection(regions),
            vec![Region::new(0, 1), Region::new(1, 2), Region::new(2, 3)]
        );
    }

    #[test]
    fn test_normalize_collapses_duplicate_carets() {
        let regions = vec![Region::caret(4), Region::caret(4), Region::caret(1)];
        assert_eq!(
            normalize_selection(regions),
            vec![Region::caret(1), Region::caret(4)]
        );
    }
}
