//! Structural suffix rule for off-trunk Y-DNA labels.
//!
//! ISOGG names a subclade by appending one character to its parent, so the
//! ancestry of a label with no explicit tree edge is derived purely from the
//! naming convention. A trailing `~` marks an approximate placement; the
//! confirmed form and the approximate form of the same clade are assumed
//! mutually exclusive in any one dataset.

/// Marker for an unconfirmed placement in the Y tree.
pub const APPROXIMATE_MARKER: char = '~';

/// The ordered ancestor candidates for one off-trunk Y label. Both are
/// verified against the dataset, confirmed form first; when neither matches,
/// the next search step continues from the confirmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixCandidates {
    pub confirmed: String,
    pub approximate: String,
}

/// Compute the candidate pair, or `None` when stripping the suffix would
/// leave an empty label. Each reduction strictly shortens the label.
pub fn suffix_candidates(label: &str) -> Option<SuffixCandidates> {
    let confirmed = if label.ends_with(APPROXIMATE_MARKER) {
        strip_last(strip_last(label))
    } else {
        strip_last(label)
    };
    if confirmed.is_empty() {
        return None;
    }
    Some(SuffixCandidates {
        approximate: format!("{}{}", confirmed, APPROXIMATE_MARKER),
        confirmed: confirmed.to_string(),
    })
}

fn strip_last(s: &str) -> &str {
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_label_drops_one_character() {
        let c = suffix_candidates("R1a1a1b1a1").unwrap();
        assert_eq!(c.confirmed, "R1a1a1b1a");
        assert_eq!(c.approximate, "R1a1a1b1a~");
    }

    #[test]
    fn approximate_label_drops_marker_and_one_character() {
        let c = suffix_candidates("R1b1a1b2~").unwrap();
        assert_eq!(c.confirmed, "R1b1a1b");
        assert_eq!(c.approximate, "R1b1a1b~");
    }

    #[test]
    fn too_short_labels_have_no_candidates() {
        assert_eq!(suffix_candidates("R"), None);
        assert_eq!(suffix_candidates("R~"), None);
        assert_eq!(suffix_candidates("~"), None);
        assert_eq!(suffix_candidates(""), None);
    }
}
