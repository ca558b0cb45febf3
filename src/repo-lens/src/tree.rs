//! Repository tree building and flattening
//!
//! Consumes the body of GitHub's recursive `git/trees` endpoint and turns the
//! flat entry list into a hierarchy for display and a flat, deduplicated list
//! of file paths for the matcher.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule
    Commit,
}

/// One entry of a recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTreeEntry {
    pub path: String,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitTreeResponse {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub tree: Option<Vec<GitTreeEntry>>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Tree
    }
}

/// Parse a tree listing and build its hierarchy.
///
/// A listing without a `tree` array is treated as an empty repository.
pub fn parse_tree_response(json: &str) -> Result<Vec<TreeNode>> {
    let response: GitTreeResponse = serde_json::from_str(json)?;

    if response.truncated {
        warn!("tree {} is truncated, some files will be missing", response.sha);
    }

    let Some(entries) = response.tree else {
        warn!("tree response has no entries, assuming an empty repository");
        return Ok(Vec::new());
    };

    debug!("building tree from {} entries", entries.len());
    Ok(build_tree(&entries))
}

/// Build a hierarchy from flat entries, creating intermediate directories.
/// The first entry seen for a path wins.
pub fn build_tree(entries: &[GitTreeEntry]) -> Vec<TreeNode> {
    let mut sorted: Vec<&GitTreeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    let mut roots = Vec::new();
    for entry in sorted {
        let parts: Vec<&str> = entry.path.split('/').filter(|p| !p.is_empty()).collect();
        insert(&mut roots, &parts, "", entry.kind);
    }
    roots
}

fn insert(nodes: &mut Vec<TreeNode>, parts: &[&str], parent: &str, kind: EntryKind) {
    let Some((name, rest)) = parts.split_first() else {
        return;
    };

    let idx = match nodes.iter().position(|n| n.name == *name) {
        Some(idx) => idx,
        None => {
            let path = if parent.is_empty() {
                name.to_string()
            } else {
                format!("{parent}/{name}")
            };
            nodes.push(TreeNode {
                name: name.to_string(),
                path,
                kind: if rest.is_empty() { kind } else { EntryKind::Tree },
                children: Vec::new(),
            });
            nodes.len() - 1
        }
    };

    if !rest.is_empty() {
        let node = &mut nodes[idx];
        let parent = node.path.clone();
        insert(&mut node.children, rest, &parent, kind);
    }
}

/// Depth-first list of every file path, without duplicates
pub fn flatten_paths(nodes: &[TreeNode]) -> Vec<String> {
    fn walk(nodes: &[TreeNode], seen: &mut HashSet<String>, out: &mut Vec<String>) {
        for node in nodes {
            if node.kind == EntryKind::Blob && seen.insert(node.path.clone()) {
                out.push(node.path.clone());
            }
            walk(&node.children, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(nodes, &mut seen, &mut out);
    out
}

/// Directories first, then by name, at every level
pub fn sort_for_display(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
    for node in nodes.iter_mut() {
        sort_for_display(&mut node.children);
    }
}
