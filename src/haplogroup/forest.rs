use crate::haplogroup::types::Namespace;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Raw on-disk shape of a tree resource: the virtual root, the closed set of
/// main-trunk labels, and the parent -> children adjacency rows.
#[derive(Deserialize, Debug)]
struct TreeFile {
    root: String,
    trunk_members: Vec<String>,
    children: HashMap<String, Vec<String>>,
    /// MT only: letter-group code -> local adjacency rows.
    #[serde(default)]
    subtrees: HashMap<String, HashMap<String, Vec<String>>>,
}

/// One tree's edges inverted into a child -> parent map. The adjacency rows
/// are the authoritative data; inverting them once at load replaces the
/// original per-query linear scan over every child list.
#[derive(Debug)]
struct ParentMap {
    parent: HashMap<String, String>,
}

impl ParentMap {
    fn build(children: &HashMap<String, Vec<String>>, what: &str) -> Result<Self> {
        let mut parent = HashMap::new();
        for (p, kids) in children {
            for child in kids {
                if let Some(previous) = parent.insert(child.clone(), p.clone()) {
                    bail!(
                        "corrupt tree data in {}: '{}' is a child of both '{}' and '{}'",
                        what,
                        child,
                        previous,
                        p
                    );
                }
            }
        }
        Ok(ParentMap { parent })
    }

    fn parent_of(&self, label: &str) -> Option<&str> {
        self.parent.get(label).map(String::as_str)
    }
}

#[derive(Debug)]
struct Trunk {
    members: HashSet<String>,
    parents: ParentMap,
}

/// Immutable registry of both namespaces' reference trees, loaded once per
/// process. All lookups are pure functions of the loaded data.
#[derive(Debug)]
pub struct Forest {
    y_trunk: Trunk,
    mt_trunk: Trunk,
    /// MT sub-trees keyed by leading letter-group code (A..Z plus HV).
    mt_subtrees: HashMap<String, ParentMap>,
}

/// Bundled ISOGG 2019 Y-DNA main trunk.
const Y_TREE_JSON: &str = include_str!("../../data/y_tree.json");
/// Bundled PhyloTree mtDNA main trunk and sub-trees.
const MT_TREE_JSON: &str = include_str!("../../data/mt_tree.json");

impl Forest {
    /// Load the tree resources bundled with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(Y_TREE_JSON, MT_TREE_JSON)
    }

    /// Load `y_tree.json` and `mt_tree.json` from a directory, for users
    /// tracking a newer tree revision than the bundled one.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let y_path = dir.join("y_tree.json");
        let mt_path = dir.join("mt_tree.json");
        let y_json = std::fs::read_to_string(&y_path)
            .with_context(|| format!("failed to read {}", y_path.display()))?;
        let mt_json = std::fs::read_to_string(&mt_path)
            .with_context(|| format!("failed to read {}", mt_path.display()))?;
        Self::from_json(&y_json, &mt_json)
    }

    pub fn from_json(y_json: &str, mt_json: &str) -> Result<Self> {
        let y_file: TreeFile =
            serde_json::from_str(y_json).context("failed to parse Y tree resource")?;
        let mt_file: TreeFile =
            serde_json::from_str(mt_json).context("failed to parse mt tree resource")?;

        if y_file.root != Namespace::Y.virtual_root() {
            bail!("Y tree resource has unexpected root '{}'", y_file.root);
        }
        if mt_file.root != Namespace::Mt.virtual_root() {
            bail!("mt tree resource has unexpected root '{}'", mt_file.root);
        }

        let y_trunk = Trunk {
            members: y_file.trunk_members.into_iter().collect(),
            parents: ParentMap::build(&y_file.children, "Y main trunk")?,
        };
        let mt_trunk = Trunk {
            members: mt_file.trunk_members.into_iter().collect(),
            parents: ParentMap::build(&mt_file.children, "mt main trunk")?,
        };

        let mut mt_subtrees = HashMap::new();
        for (code, children) in &mt_file.subtrees {
            let what = format!("mt sub-tree {}", code);
            mt_subtrees.insert(code.clone(), ParentMap::build(children, &what)?);
        }

        Ok(Forest {
            y_trunk,
            mt_trunk,
            mt_subtrees,
        })
    }

    fn trunk(&self, namespace: Namespace) -> &Trunk {
        match namespace {
            Namespace::Y => &self.y_trunk,
            Namespace::Mt => &self.mt_trunk,
        }
    }

    /// Whether the label belongs to the closed set with explicit tree edges.
    pub fn is_main_trunk(&self, namespace: Namespace, label: &str) -> bool {
        self.trunk(namespace).members.contains(label)
    }

    /// Parent of a main-trunk label, which may be the virtual root sentinel.
    /// `None` means the label is not listed as any trunk node's child.
    pub fn parent_in_main_trunk(&self, namespace: Namespace, label: &str) -> Option<&str> {
        self.trunk(namespace).parents.parent_of(label)
    }

    /// Select the MT sub-tree governing an off-trunk label by its leading
    /// letter-group. `None` means the group matches no known sub-tree.
    pub fn classify_subtree(&self, label: &str) -> Option<&str> {
        let group = leading_letter_group(label)?;
        self.mt_subtrees
            .get_key_value(group)
            .map(|(code, _)| code.as_str())
    }

    /// Parent of a label within one MT sub-tree. `None` is an orphan (a
    /// sub-tree's local root has no further ancestor in this data model).
    pub fn parent_in_subtree(&self, subtree: &str, label: &str) -> Option<&str> {
        self.mt_subtrees.get(subtree)?.parent_of(label)
    }
}

/// Greedy 1-2 uppercase-letter prefix of an mtDNA label, e.g. `HV0a` -> `HV`,
/// `H1` -> `H`. `None` when the label does not start with an uppercase letter.
pub fn leading_letter_group(label: &str) -> Option<&str> {
    let len = label
        .bytes()
        .take(2)
        .take_while(|b| b.is_ascii_uppercase())
        .count();
    if len == 0 {
        None
    } else {
        Some(&label[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_group_is_greedy() {
        assert_eq!(leading_letter_group("HV0a1"), Some("HV"));
        assert_eq!(leading_letter_group("H1c5a"), Some("H"));
        assert_eq!(leading_letter_group("U5a1a1a"), Some("U"));
        assert_eq!(leading_letter_group("123abc"), None);
        assert_eq!(leading_letter_group(""), None);
    }

    #[test]
    fn duplicate_child_is_rejected() {
        let y = r#"{"root":"Y","trunk_members":["A","B","C"],
                    "children":{"Y":["A"],"A":["B","C"],"B":["C"]}}"#;
        let mt = r#"{"root":"mt-MRCA","trunk_members":[],"children":{},"subtrees":{}}"#;
        let err = Forest::from_json(y, mt).unwrap_err();
        assert!(err.to_string().contains("child of both"));
    }

    #[test]
    fn bundled_resources_parse() {
        let forest = Forest::bundled().unwrap();
        assert!(forest.is_main_trunk(Namespace::Y, "A0000"));
        assert_eq!(
            forest.parent_in_main_trunk(Namespace::Y, "A0000"),
            Some("Y")
        );
        assert!(forest.is_main_trunk(Namespace::Mt, "CZ"));
        assert_eq!(forest.classify_subtree("U5a1a1a"), Some("U"));
        assert_eq!(forest.parent_in_subtree("U", "U5a1a1a"), Some("U5a1a1"));
    }
}
