use std::fmt;

/// The two haplogroup nomenclatures. Labels are scoped to one of these;
/// the same string can name different clades in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Y,
    Mt,
}

impl Namespace {
    pub fn name(&self) -> &'static str {
        match self {
            Namespace::Y => "Y",
            Namespace::Mt => "mt",
        }
    }

    /// Sentinel ancestor of the namespace's main trunk.
    pub fn virtual_root(&self) -> &'static str {
        match self {
            Namespace::Y => "Y",
            Namespace::Mt => "mt-MRCA",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a label's ancestry could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvableReason {
    /// (MT) the leading letter-group matches no known sub-tree.
    UnknownSubtree(String),
    /// The label is not listed as any node's child in the relevant tree.
    Orphan,
    /// (Y off-trunk) stripping the suffix left nothing to search for.
    NoShorterForm,
}

impl fmt::Display for UnresolvableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvableReason::UnknownSubtree(code) => {
                write!(f, "no sub-tree known for letter-group '{}'", code)
            }
            UnresolvableReason::Orphan => {
                f.write_str("label has no parent in the reference tree")
            }
            UnresolvableReason::NoShorterForm => {
                f.write_str("label is too short to derive an ancestor from")
            }
        }
    }
}

/// Terminal outcome of one bounded-retry search. Always a value, never an
/// error: only missing or corrupt tree resources abort a run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// An ancestor with at least one individual in the dataset.
    Found {
        ancestor: String,
        /// Record indices carrying the ancestor label.
        ancestor_records: Vec<usize>,
        /// Record indices carrying the original query label, captured once
        /// at entry so callers can overlay both point sets.
        query_records: Vec<usize>,
        /// Ancestor hops performed before the match (1-based).
        hops: u32,
    },
    /// Resolution reached the namespace's virtual root; no closer ancestor
    /// exists.
    RootReached { namespace: Namespace },
    /// All attempts used up without a dataset match.
    Exhausted {
        last_candidate: String,
        attempts: u32,
    },
    /// The label (or one reached during the search) has no defined ancestor.
    Unresolvable {
        label: String,
        reason: UnresolvableReason,
    },
    /// Rejected before any resolution attempt.
    MalformedLabel { label: String },
}

impl SearchResult {
    /// Short status tag for user-facing messaging.
    pub fn status(&self) -> &'static str {
        match self {
            SearchResult::Found { .. } => "found",
            SearchResult::RootReached { .. } => "root-reached",
            SearchResult::Exhausted { .. } => "exhausted",
            SearchResult::Unresolvable { .. } => "unresolvable",
            SearchResult::MalformedLabel { .. } => "malformed-label",
        }
    }
}
