use crate::dataset::MatchIndex;
use crate::haplogroup::forest::{leading_letter_group, Forest};
use crate::haplogroup::resolver::{AncestorResolver, Resolution};
use crate::haplogroup::types::{Namespace, SearchResult};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Bounded-retry ascent: resolve the next candidate ancestor, check the
/// dataset, and repeat up to `max_attempts` hops. The loop counter is the
/// sole termination guarantee; label shortening and tree acyclicity are not
/// relied on for it.
pub fn search(
    forest: &Forest,
    index: &dyn MatchIndex,
    namespace: Namespace,
    query: &str,
    max_attempts: u32,
) -> SearchResult {
    if query.is_empty() {
        return SearchResult::MalformedLabel {
            label: query.to_string(),
        };
    }
    if namespace == Namespace::Mt && leading_letter_group(query).is_none() {
        return SearchResult::MalformedLabel {
            label: query.to_string(),
        };
    }

    // Captured once, outside the retry loop, so consumers can overlay the
    // original query's individuals with the found ancestor's.
    let query_records = index.records_for(namespace, query).to_vec();

    let resolver = AncestorResolver::new(forest);
    let mut current = query.to_string();

    for hop in 0..max_attempts {
        let attempts = hop + 1;
        match resolver.resolve(namespace, &current, index) {
            Resolution::VirtualRoot => return SearchResult::RootReached { namespace },
            Resolution::Unresolvable { label, reason } => {
                return SearchResult::Unresolvable { label, reason }
            }
            Resolution::Matched { label, records } => {
                return SearchResult::Found {
                    ancestor: label,
                    ancestor_records: records,
                    query_records,
                    hops: attempts,
                }
            }
            Resolution::NoMatch { next } => {
                if attempts >= max_attempts {
                    return SearchResult::Exhausted {
                        last_candidate: next,
                        attempts,
                    };
                }
                current = next;
            }
            Resolution::Parent(parent) => {
                let records = index.records_for(namespace, &parent);
                if !records.is_empty() {
                    return SearchResult::Found {
                        ancestor: parent,
                        ancestor_records: records.to_vec(),
                        query_records,
                        hops: attempts,
                    };
                }
                if attempts >= max_attempts {
                    return SearchResult::Exhausted {
                        last_candidate: parent,
                        attempts,
                    };
                }
                current = parent;
            }
        }
    }

    // max_attempts == 0: no hops permitted.
    SearchResult::Exhausted {
        last_candidate: current,
        attempts: 0,
    }
}
