//! Table-of-contents model: outline building and scroll-spy resolution.
//!
//! The outline is two levels deep, h2 and h3, matching what the post
//! template renders. The DOM side scans `#postContent`, hands the
//! headings over, and renders whatever comes back; everything decidable
//! without a DOM lives here.

/// A heading scanned out of the post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 or 3; anything else is ignored by the outline.
    pub level: u8,
    /// Element id, possibly empty before [`fallback_id`] assignment.
    pub id: String,
    pub text: String,
}

/// One rendered TOC entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    /// True for h3 entries, which indent under their h2.
    pub nested: bool,
}

/// Pixels above a heading at which it becomes the active one.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Id assigned to the `index`-th heading when the markup carries none.
pub fn fallback_id(index: usize) -> String {
    format!("heading-{index}")
}

/// Build the outline from scanned headings, keeping only h2/h3.
pub fn build_outline(headings: &[Heading]) -> Vec<TocEntry> {
    headings
        .iter()
        .filter(|h| h.level == 2 || h.level == 3)
        .map(|h| TocEntry {
            id: h.id.clone(),
            text: h.text.clone(),
            nested: h.level == 3,
        })
        .collect()
}

/// Resolve the active heading for the current scroll position.
///
/// `offsets` pairs each heading id with its document-space top, in scan
/// order. The active heading is the last one whose top, shifted up by
/// [`SCROLL_SPY_OFFSET`], is at or above `scroll_y`: the section
/// the reader is currently inside. Above the first heading, none is
/// active.
pub fn active_heading(scroll_y: f64, offsets: &[(String, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, top) in offsets {
        if scroll_y >= top - SCROLL_SPY_OFFSET {
            current = Some(id.as_str());
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(level: u8, id: &str, text: &str) -> Heading {
        Heading {
            level,
            id: id.into(),
            text: text.into(),
        }
    }

    #[test]
    fn outline_keeps_two_levels() {
        let headings = [
            h(2, "intro", "Intro"),
            h(3, "detail", "Detail"),
            h(4, "deep", "Too deep"),
        ];
        let outline = build_outline(&headings);
        assert_eq!(outline.len(), 2);
        assert!(!outline[0].nested);
        assert!(outline[1].nested);
    }

    #[test]
    fn fallback_ids_are_positional() {
        assert_eq!(fallback_id(0), "heading-0");
        assert_eq!(fallback_id(7), "heading-7");
    }

    #[test]
    fn no_headings_means_empty_outline() {
        assert!(build_outline(&[]).is_empty());
    }

    #[test]
    fn spy_picks_last_heading_scrolled_past() {
        let offsets = vec![
            ("a".to_string(), 200.0),
            ("b".to_string(), 600.0),
            ("c".to_string(), 1200.0),
        ];
        assert_eq!(active_heading(0.0, &offsets), None);
        assert_eq!(active_heading(150.0, &offsets), Some("a"));
        assert_eq!(active_heading(550.0, &offsets), Some("b"));
        assert_eq!(active_heading(5000.0, &offsets), Some("c"));
    }

    #[test]
    fn spy_activates_within_offset_band() {
        let offsets = vec![("a".to_string(), 200.0)];
        // 100px above the heading already counts as inside it.
        assert_eq!(active_heading(100.0, &offsets), Some("a"));
        assert_eq!(active_heading(99.0, &offsets), None);
    }
}
