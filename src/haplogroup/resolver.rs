use crate::dataset::MatchIndex;
use crate::haplogroup::forest::{leading_letter_group, Forest};
use crate::haplogroup::strategy::suffix_candidates;
use crate::haplogroup::types::{Namespace, UnresolvableReason};

/// One ancestor-resolution step. The Y off-trunk arm folds the dataset
/// presence check into candidate selection (the suffix rule produces two
/// candidate forms and only the dataset can tell which one is in play), so
/// the outcome distinguishes verified from not-yet-verified ancestors.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Parent from an explicit tree edge; dataset not yet consulted.
    Parent(String),
    /// Y off-trunk: a candidate form with dataset records.
    Matched { label: String, records: Vec<usize> },
    /// Y off-trunk: neither candidate form is present; the search continues
    /// from the confirmed form.
    NoMatch { next: String },
    /// The namespace's virtual root; no closer ancestor exists.
    VirtualRoot,
    /// No ancestor is defined for this label.
    Unresolvable {
        label: String,
        reason: UnresolvableReason,
    },
}

/// Namespace-dispatch layer: picks the tree lookup or the suffix rule (and,
/// for mtDNA, the governing sub-tree) by inspecting the label.
pub struct AncestorResolver<'a> {
    forest: &'a Forest,
}

impl<'a> AncestorResolver<'a> {
    pub fn new(forest: &'a Forest) -> Self {
        AncestorResolver { forest }
    }

    pub fn resolve(
        &self,
        namespace: Namespace,
        label: &str,
        index: &dyn MatchIndex,
    ) -> Resolution {
        match namespace {
            Namespace::Y => self.resolve_y(label, index),
            Namespace::Mt => self.resolve_mt(label),
        }
    }

    fn resolve_y(&self, label: &str, index: &dyn MatchIndex) -> Resolution {
        if self.forest.is_main_trunk(Namespace::Y, label) {
            return self.trunk_parent(Namespace::Y, label);
        }

        // Off-trunk: ancestry comes from the naming convention alone. Both
        // the confirmed and the approximate form are checked, confirmed
        // first; at most one of the pair occurs in a dataset.
        let candidates = match suffix_candidates(label) {
            Some(c) => c,
            None => {
                return Resolution::Unresolvable {
                    label: label.to_string(),
                    reason: UnresolvableReason::NoShorterForm,
                }
            }
        };
        for candidate in [&candidates.confirmed, &candidates.approximate] {
            let records = index.records_for(Namespace::Y, candidate);
            if !records.is_empty() {
                return Resolution::Matched {
                    label: candidate.clone(),
                    records: records.to_vec(),
                };
            }
        }
        Resolution::NoMatch {
            next: candidates.confirmed,
        }
    }

    fn resolve_mt(&self, label: &str) -> Resolution {
        if self.forest.is_main_trunk(Namespace::Mt, label) {
            return self.trunk_parent(Namespace::Mt, label);
        }

        let subtree = match self.forest.classify_subtree(label) {
            Some(code) => code,
            None => {
                let group = leading_letter_group(label).unwrap_or("").to_string();
                return Resolution::Unresolvable {
                    label: label.to_string(),
                    reason: UnresolvableReason::UnknownSubtree(group),
                };
            }
        };
        match self.forest.parent_in_subtree(subtree, label) {
            Some(parent) => Resolution::Parent(parent.to_string()),
            // A sub-tree's local root has no edge back to mt-MRCA.
            None => Resolution::Unresolvable {
                label: label.to_string(),
                reason: UnresolvableReason::Orphan,
            },
        }
    }

    fn trunk_parent(&self, namespace: Namespace, label: &str) -> Resolution {
        match self.forest.parent_in_main_trunk(namespace, label) {
            Some(parent) if parent == namespace.virtual_root() => Resolution::VirtualRoot,
            Some(parent) => Resolution::Parent(parent.to_string()),
            None => Resolution::Unresolvable {
                label: label.to_string(),
                reason: UnresolvableReason::Orphan,
            },
        }
    }
}
