//! Listing iterator over a snapshot of the inventory.

use crate::config::ListingStyle;

/// Yielded instead of item lines when a framed listing has nothing to show.
pub const EMPTY_SENTINEL: &str = "(inventory is empty)";

/// Last line of a framed, non-empty listing.
pub const END_SENTINEL: &str = "(end of listing)";

/// Finite sequence of display lines, one per item in insertion order.
///
/// Owns its lines: it is built from a snapshot taken when the listing was
/// requested and never observes later changes to the inventory. Call
/// `Inventory::list` again for a fresh listing.
#[derive(Debug, Clone)]
pub struct Listing {
    lines: std::vec::IntoIter<String>,
}

impl Listing {
    pub(crate) fn new(item_lines: Vec<String>, style: ListingStyle) -> Self {
        let lines = match style {
            ListingStyle::Plain => item_lines,
            ListingStyle::Framed if item_lines.is_empty() => vec![EMPTY_SENTINEL.to_string()],
            ListingStyle::Framed => {
                let mut lines = item_lines;
                lines.push(END_SENTINEL.to_string());
                lines
            }
        };
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl Iterator for Listing {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl ExactSizeIterator for Listing {}

impl core::iter::FusedIterator for Listing {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_yields_item_lines_only() {
        let listing = Listing::new(lines(&["a", "b"]), ListingStyle::Plain);
        assert_eq!(listing.collect::<Vec<_>>(), lines(&["a", "b"]));

        let empty = Listing::new(Vec::new(), ListingStyle::Plain);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn framed_appends_end_sentinel() {
        let listing = Listing::new(lines(&["a"]), ListingStyle::Framed);
        assert_eq!(listing.collect::<Vec<_>>(), lines(&["a", END_SENTINEL]));
    }

    #[test]
    fn framed_empty_yields_single_sentinel() {
        let listing = Listing::new(Vec::new(), ListingStyle::Framed);
        assert_eq!(listing.collect::<Vec<_>>(), lines(&[EMPTY_SENTINEL]));
    }

    #[test]
    fn reports_exact_length() {
        let mut listing = Listing::new(lines(&["a", "b"]), ListingStyle::Framed);
        assert_eq!(listing.len(), 3);
        listing.next();
        assert_eq!(listing.len(), 2);
    }
}
